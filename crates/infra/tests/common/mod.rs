//! テスト共通フィクスチャ
//!
//! DB を使用する統合テストで共通利用するシードヘルパー。
//! Rust の統合テスト規約に従い `tests/common/mod.rs` に配置。

// 各テストファイルが独立したクレートとしてコンパイルされるため、
// 使用しない関数に dead_code 警告が出る。モジュール全体で抑制する。
#![allow(dead_code)]

use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

// =============================================================================
// シードデータ定数
// =============================================================================

/// テスト用の固定日時
pub fn test_now() -> DateTime<Utc> {
   DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

// =============================================================================
// DB セットアップヘルパー
// =============================================================================

/// テスト用アイテムを直接 SQL で挿入（リポジトリを経由せずにシードデータを作成する場合）
///
/// `created_at` を明示指定できるため、並び順のテストに使う。
pub async fn insert_item_raw(
   pool: &PgPool,
   user_id: &str,
   name: &str,
   quantity: Option<&str>,
   created_at: DateTime<Utc>,
) -> Uuid {
   sqlx::query_scalar::<_, Uuid>(
      r#"
        INSERT INTO pantry_items (id, user_id, name, quantity, created_at)
        VALUES ($1, $2, $3, $4, $5)
        RETURNING id
        "#,
   )
   .bind(Uuid::now_v7())
   .bind(user_id)
   .bind(name)
   .bind(quantity)
   .bind(created_at)
   .fetch_one(pool)
   .await
   .expect("アイテム挿入に失敗")
}
