//! # API エラーレスポンス
//!
//! 全エンドポイント共通のエラーレスポンス形式を定義する。
//! `{"error": <メッセージ>, "details": <補足>}` の形で、`details` がない場合は
//! フィールドごと JSON から省略される。
//!
//! HTTP ステータスコードとの対応付けはハンドラ側（api クレートのエラー型）が行い、
//! このモジュールはレスポンスボディの形だけを持つ。

use serde::{Deserialize, Serialize};

/// エラーレスポンスの共通形式
///
/// ## フィールド
///
/// - `error`: クライアント向けのエラーメッセージ
/// - `details`: 補足情報（例: リクエストボディのパース失敗理由）。
///   クライアント由来の情報のみを載せ、サーバ内部のエラー内容は含めない
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   /// エラーメッセージ
   pub error:   String,
   /// 補足情報（省略可能）
   #[serde(skip_serializing_if = "Option::is_none")]
   pub details: Option<String>,
}

impl ErrorResponse {
   /// メッセージのみのエラーレスポンスを作成する
   pub fn new(error: impl Into<String>) -> Self {
      Self {
         error:   error.into(),
         details: None,
      }
   }

   /// 補足情報付きのエラーレスポンスを作成する
   pub fn with_details(error: impl Into<String>, details: impl Into<String>) -> Self {
      Self {
         error:   error.into(),
         details: Some(details.into()),
      }
   }

   /// データベース操作失敗時の共通レスポンスを作成する
   ///
   /// ドライバのエラー内容はレスポンスに含めない。呼び出し側でログに出力し、
   /// クライアントにはこの固定メッセージのみを返す。
   pub fn db_query_failed() -> Self {
      Self::new("db query failed")
   }
}
