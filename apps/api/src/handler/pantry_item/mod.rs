//! # パントリーアイテムハンドラ
//!
//! パントリーアイテムの登録・一覧取得・削除 API を提供する。
//!
//! ## エンドポイント
//!
//! - `POST /pantry/items` - アイテムを登録
//! - `GET /pantry/items?user_id={user_id}` - 所有者のアイテム一覧
//! - `DELETE /pantry/items/{id}` - アイテムを削除

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State, rejection::JsonRejection},
   http::StatusCode,
   response::IntoResponse,
};
use chrono::{DateTime, Utc};
use pantryplate_domain::pantry_item::{ItemName, NewPantryItem, OwnerId, PantryItem, PantryItemId};
use pantryplate_infra::repository::PantryItemRepository;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::ApiError;

/// パントリーアイテム API の共有状態
pub struct PantryItemState {
   pub repository: Arc<dyn PantryItemRepository>,
}

// --- リクエスト/レスポンス型 ---

/// アイテム登録リクエスト
///
/// `user_id` / `name` のフィールド欠落は空文字として受け、
/// バリデーションで 400 を返す。
#[derive(Debug, Deserialize)]
pub struct CreatePantryItemRequest {
   #[serde(default)]
   pub user_id:  String,
   #[serde(default)]
   pub name:     String,
   pub quantity: Option<String>,
}

/// 一覧取得クエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ListPantryItemsQuery {
   pub user_id: Option<String>,
}

/// アイテムレスポンス
///
/// `quantity` は未指定のアイテムでも省略せず `null` として返す。
#[derive(Debug, Serialize)]
pub struct PantryItemResponse {
   pub id:         Uuid,
   pub user_id:    String,
   pub name:       String,
   pub quantity:   Option<String>,
   pub created_at: DateTime<Utc>,
}

impl From<&PantryItem> for PantryItemResponse {
   fn from(item: &PantryItem) -> Self {
      Self {
         id:         *item.id().as_uuid(),
         user_id:    item.owner_id().as_str().to_string(),
         name:       item.name().as_str().to_string(),
         quantity:   item.quantity().map(str::to_string),
         created_at: item.created_at(),
      }
   }
}

/// アイテム削除レスポンス
#[derive(Debug, Serialize)]
pub struct DeletePantryItemResponse {
   pub message: String,
}

// --- ハンドラ ---

/// POST /pantry/items
///
/// パントリーアイテムを登録する。
///
/// ## リクエストボディ
///
/// - `user_id`: 所有者の識別子（必須）
/// - `name`: アイテム名（必須）
/// - `quantity`: 数量の自由記述（省略可）
///
/// ## レスポンス
///
/// - `201 Created`: 登録されたアイテム
/// - `400 Bad Request`: ボディが JSON として不正、または必須フィールドが空
/// - `500 Internal Server Error`: データベースエラー
#[tracing::instrument(skip_all)]
pub async fn create_pantry_item(
   State(state): State<Arc<PantryItemState>>,
   body: Result<Json<CreatePantryItemRequest>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
   let Json(req) = body?;

   let owner_id = OwnerId::new(req.user_id)?;
   let name = ItemName::new(req.name)?;
   let new_item = NewPantryItem {
      owner_id,
      name,
      quantity: req.quantity,
   };

   let item = state.repository.insert(&new_item).await?;

   Ok((StatusCode::CREATED, Json(PantryItemResponse::from(&item))))
}

/// GET /pantry/items
///
/// 所有者のパントリーアイテム一覧を登録日時の新しい順で取得する。
///
/// ## クエリパラメータ
///
/// - `user_id`: 所有者の識別子（必須）
///
/// ## レスポンス
///
/// - `200 OK`: アイテムの配列（0 件なら空配列）
/// - `400 Bad Request`: `user_id` が未指定または空
/// - `500 Internal Server Error`: データベースエラー
#[tracing::instrument(skip_all)]
pub async fn list_pantry_items(
   State(state): State<Arc<PantryItemState>>,
   Query(query): Query<ListPantryItemsQuery>,
) -> Result<impl IntoResponse, ApiError> {
   let Some(user_id) = query.user_id else {
      return Err(ApiError::BadRequest("user_id is required".to_string()));
   };
   let owner_id = OwnerId::new(user_id)?;

   let items = state.repository.find_by_owner(&owner_id).await?;

   let response: Vec<PantryItemResponse> = items.iter().map(PantryItemResponse::from).collect();
   Ok((StatusCode::OK, Json(response)))
}

/// DELETE /pantry/items/{id}
///
/// パントリーアイテムを削除する。
///
/// ## パスパラメータ
///
/// - `id`: アイテム ID（UUID）
///
/// ## レスポンス
///
/// - `200 OK`: 削除完了メッセージ
/// - `400 Bad Request`: `id` が UUID として不正
/// - `404 Not Found`: 該当するアイテムが存在しない
/// - `500 Internal Server Error`: データベースエラー
#[tracing::instrument(skip_all, fields(%id))]
pub async fn delete_pantry_item(
   State(state): State<Arc<PantryItemState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   // UUID として不正な ID は 404 ではなく 400 で返す
   let id = id
      .parse::<Uuid>()
      .map(PantryItemId::from_uuid)
      .map_err(|_| ApiError::BadRequest("invalid item id".to_string()))?;

   let deleted = state.repository.delete(&id).await?;
   if !deleted {
      return Err(ApiError::NotFound("item not found".to_string()));
   }

   Ok((
      StatusCode::OK,
      Json(DeletePantryItemResponse {
         message: "item deleted".to_string(),
      }),
   ))
}
