//! # ヘルスチェックハンドラ
//!
//! API の稼働状態を確認するためのエンドポイント。
//!
//! - `GET /` - ルート（稼働メッセージ）
//! - `GET /health` - Liveness Check（常に `"ok"` を返す）
//! - `GET /db-test` - データベース疎通確認（現在時刻を取得）

use std::sync::Arc;

use axum::{Json, extract::State, http::StatusCode, response::IntoResponse};
use chrono::{DateTime, Utc};
use pantryplate_shared::{ErrorResponse, HealthResponse};
use serde::Serialize;
use sqlx::PgPool;

/// ルートエンドポイントのレスポンス
#[derive(Debug, Serialize)]
pub struct IndexResponse {
   pub message: String,
}

/// GET /
///
/// API が稼働していることを示すメッセージを返す。
pub async fn index() -> Json<IndexResponse> {
   Json(IndexResponse {
      message: "PantryToPlate API running".to_string(),
   })
}

/// GET /health
///
/// API のヘルスチェックエンドポイント。監視基盤からの死活監視に使用する。
pub async fn health_check() -> Json<HealthResponse> {
   Json(HealthResponse::ok())
}

/// DB 疎通確認用の State
pub struct DbTestState {
   pub pool: PgPool,
}

/// DB 疎通確認のレスポンス
#[derive(Debug, Serialize)]
pub struct DbTimeResponse {
   pub db_time: DateTime<Utc>,
}

/// GET /db-test
///
/// データベースに対して現在時刻を問い合わせ、接続状態を確認する。
///
/// ## レスポンス
///
/// - `200 OK`: データベースの現在時刻
/// - `500 Internal Server Error`: クエリの実行に失敗した場合
#[tracing::instrument(skip_all)]
pub async fn db_test(State(state): State<Arc<DbTestState>>) -> impl IntoResponse {
   match sqlx::query_scalar::<_, DateTime<Utc>>("SELECT now()")
      .fetch_one(&state.pool)
      .await
   {
      Ok(db_time) => (StatusCode::OK, Json(DbTimeResponse { db_time })).into_response(),
      Err(e) => {
         tracing::error!("DB 接続確認に失敗しました: {}", e);
         (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorResponse::db_query_failed()),
         )
            .into_response()
      }
   }
}

#[cfg(test)]
mod tests;
