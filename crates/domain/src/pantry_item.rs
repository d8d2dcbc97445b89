//! # パントリーアイテム
//!
//! パントリー（食材在庫）アイテムのエンティティと値オブジェクトを定義する。
//!
//! ## ドメイン用語
//!
//! | 型 | ドメイン用語 | 要件 |
//! |---|------------|------|
//! | [`PantryItem`] | パントリーアイテム | 作成・一覧・削除のみ。作成後の更新は存在しない |
//! | [`OwnerId`] | 所有者 ID | 自由形式の文字列。ユーザーテーブルとの照合は行わない |
//! | [`ItemName`] | アイテム名 | 必須。空文字列は拒否 |
//!
//! ## 設計方針
//!
//! - **Newtype パターン**: ID・検証済み文字列を専用型で表現
//! - **生成時バリデーション**: 存在チェック（trim 後に空でないこと）のみ。
//!   長さや内容の検証はスコープ外
//! - **サーバ採番**: `id` と `created_at` はデータベースが採番するため、
//!   未永続のアイテムは [`NewPantryItem`]、永続済みは [`PantryItem`] と型を分ける
//!
//! ## 使用例
//!
//! ```rust
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use pantryplate_domain::pantry_item::{ItemName, NewPantryItem, OwnerId};
//!
//! let item = NewPantryItem {
//!    owner_id: OwnerId::new("demo_user")?,
//!    name:     ItemName::new("Milk")?,
//!    quantity: Some("2L".to_string()),
//! };
//! assert_eq!(item.name.as_str(), "Milk");
//! # Ok(())
//! # }
//! ```

use chrono::{DateTime, Utc};

// =========================================================================
// PantryItemId（アイテム ID）
// =========================================================================

define_uuid_id! {
   /// パントリーアイテムの一意識別子
   ///
   /// データベース側で採番された UUID を保持する。
   pub struct PantryItemId;
}

// =========================================================================
// OwnerId（所有者 ID）
// =========================================================================

define_validated_string! {
   /// 所有者 ID（値オブジェクト）
   ///
   /// アイテムの所有者を識別する自由形式の文字列。認証とは紐付かないが、
   /// 個人を識別しうる値のため Debug 出力はマスクされる。
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない（trim 後）
   pub struct OwnerId {
      label: "user_id",
      pii: true,
   }
}

// =========================================================================
// ItemName（アイテム名）
// =========================================================================

define_validated_string! {
   /// アイテム名（値オブジェクト）
   ///
   /// # バリデーション
   ///
   /// - 空文字列ではない（trim 後）
   pub struct ItemName {
      label: "name",
   }
}

// =========================================================================
// NewPantryItem（未永続のアイテム）
// =========================================================================

/// 作成リクエストから組み立てた、まだ永続化されていないアイテム
///
/// `id` と `created_at` はデータベースが採番するため持たない。
/// リポジトリの挿入操作に渡すと、採番済みの [`PantryItem`] が返る。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPantryItem {
   /// 所有者 ID
   pub owner_id: OwnerId,
   /// アイテム名
   pub name:     ItemName,
   /// 数量（任意の自由形式文字列）
   pub quantity: Option<String>,
}

// =========================================================================
// PantryItem（永続済みのアイテム）
// =========================================================================

/// パントリーアイテムエンティティ
///
/// データベースに永続化済みのアイテムを表現する。
/// 作成後の更新操作は存在せず、削除のみ可能。
///
/// # 不変条件
///
/// - `id` と `created_at` はデータベース採番の値
/// - `owner_id` と `name` は検証済み（空でない）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PantryItem {
   id:         PantryItemId,
   owner_id:   OwnerId,
   name:       ItemName,
   quantity:   Option<String>,
   created_at: DateTime<Utc>,
}

impl PantryItem {
   /// 既存のデータからアイテムを復元する（データベースから取得時）
   pub fn from_db(
      id: PantryItemId,
      owner_id: OwnerId,
      name: ItemName,
      quantity: Option<String>,
      created_at: DateTime<Utc>,
   ) -> Self {
      Self {
         id,
         owner_id,
         name,
         quantity,
         created_at,
      }
   }

   // Getter メソッド

   pub fn id(&self) -> &PantryItemId {
      &self.id
   }

   pub fn owner_id(&self) -> &OwnerId {
      &self.owner_id
   }

   pub fn name(&self) -> &ItemName {
      &self.name
   }

   pub fn quantity(&self) -> Option<&str> {
      self.quantity.as_deref()
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }
}

// =========================================================================
// テスト
// =========================================================================
