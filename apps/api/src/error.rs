//! # API エラー定義
//!
//! API で発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! クライアントには [`ErrorResponse`]（`error` + 任意の `details`）の形で返す。
//! データベースエラーの詳細は接続情報を含みうるため、ログにのみ出力し
//! レスポンスには固定メッセージを返す。

use axum::{
   Json,
   extract::rejection::JsonRejection,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use pantryplate_domain::DomainError;
use pantryplate_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リクエストボディの JSON が解釈できない
   #[error("リクエストボディが不正です: {0}")]
   InvalidBody(#[from] JsonRejection),

   /// バリデーションエラー
   #[error("バリデーションエラー: {0}")]
   BadRequest(String),

   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// データベースエラー
   #[error("データベースエラー: {0}")]
   Database(#[from] pantryplate_infra::InfraError),
}

impl From<DomainError> for ApiError {
   fn from(e: DomainError) -> Self {
      match e {
         DomainError::Validation(msg) => ApiError::BadRequest(msg),
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let (status, body) = match self {
         ApiError::InvalidBody(rejection) => (
            StatusCode::BAD_REQUEST,
            ErrorResponse::with_details("invalid request body", rejection.body_text()),
         ),
         ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, ErrorResponse::new(msg)),
         ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, ErrorResponse::new(msg)),
         ApiError::Database(e) => {
            // Debug 表示で InfraError が捕捉した SpanTrace も記録する
            tracing::error!("データベースエラー: {:?}", e);
            (
               StatusCode::INTERNAL_SERVER_ERROR,
               ErrorResponse::db_query_failed(),
            )
         }
      };

      (status, Json(body)).into_response()
   }
}
