//! # ヘルスチェックレスポンス
//!
//! `GET /health` のレスポンス型を定義する。プロセスが生きてリクエストに
//! 応答できることだけを示し、データベース状態には依存しない
//! （データベース疎通の確認は `/db-test` が担う）。

use serde::{Deserialize, Serialize};

/// ヘルスチェックのレスポンス
///
/// 常に `{"status": "ok"}` を返す。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
   /// ステータス文字列
   pub status: String,
}

impl HealthResponse {
   /// 正常ステータスのレスポンスを作成する
   pub fn ok() -> Self {
      Self {
         status: "ok".to_string(),
      }
   }
}
