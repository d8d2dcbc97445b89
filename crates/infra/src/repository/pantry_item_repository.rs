//! パントリーアイテムの永続化。
//!
//! [`PantryItemRepository`] トレイトが操作を定義し、
//! [`PostgresPantryItemRepository`] が PostgreSQL 実装を提供する。

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use pantryplate_domain::pantry_item::{ItemName, NewPantryItem, OwnerId, PantryItem, PantryItemId};
use sqlx::PgPool;
use uuid::Uuid;

use crate::error::InfraError;

/// パントリーアイテムの永続化操作
///
/// API 層は `Arc<dyn PantryItemRepository>` としてこのトレイトに依存する。
#[async_trait]
pub trait PantryItemRepository: Send + Sync {
   /// アイテムを登録する
   ///
   /// ID と登録日時はデータベース側で採番・記録される。
   ///
   /// # 戻り値
   ///
   /// - `Ok(PantryItem)`: 採番済みの登録されたアイテム
   /// - `Err(InfraError)`: クエリの実行に失敗した場合
   async fn insert(&self, item: &NewPantryItem) -> Result<PantryItem, InfraError>;

   /// 所有者のアイテム一覧を取得する
   ///
   /// 登録日時の新しい順（降順）で返す。該当がなければ空の Vec を返す。
   async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<PantryItem>, InfraError>;

   /// アイテムを削除する
   ///
   /// # 戻り値
   ///
   /// - `Ok(true)`: 削除した
   /// - `Ok(false)`: 該当する ID のアイテムが存在しなかった
   async fn delete(&self, id: &PantryItemId) -> Result<bool, InfraError>;
}

/// PostgreSQL 実装の PantryItemRepository
#[derive(Debug, Clone)]
pub struct PostgresPantryItemRepository {
   pool: PgPool,
}

impl PostgresPantryItemRepository {
   /// 新しいリポジトリインスタンスを作成
   pub fn new(pool: PgPool) -> Self {
      Self { pool }
   }
}

#[async_trait]
impl PantryItemRepository for PostgresPantryItemRepository {
   async fn insert(&self, item: &NewPantryItem) -> Result<PantryItem, InfraError> {
      let row = sqlx::query_as::<_, PantryItemRow>(
         r#"
            INSERT INTO pantry_items (user_id, name, quantity)
            VALUES ($1, $2, $3)
            RETURNING
                id,
                user_id,
                name,
                quantity,
                created_at
            "#,
      )
      .bind(item.owner_id.as_str())
      .bind(item.name.as_str())
      .bind(item.quantity.as_deref())
      .fetch_one(&self.pool)
      .await?;

      row.into_entity()
   }

   async fn find_by_owner(&self, owner_id: &OwnerId) -> Result<Vec<PantryItem>, InfraError> {
      let rows = sqlx::query_as::<_, PantryItemRow>(
         r#"
            SELECT
                id,
                user_id,
                name,
                quantity,
                created_at
            FROM pantry_items
            WHERE user_id = $1
            ORDER BY created_at DESC
            "#,
      )
      .bind(owner_id.as_str())
      .fetch_all(&self.pool)
      .await?;

      rows.into_iter().map(PantryItemRow::into_entity).collect()
   }

   async fn delete(&self, id: &PantryItemId) -> Result<bool, InfraError> {
      let result = sqlx::query(
         r#"
            DELETE FROM pantry_items
            WHERE id = $1
            "#,
      )
      .bind(id.as_uuid())
      .execute(&self.pool)
      .await?;

      Ok(result.rows_affected() > 0)
   }
}

/// pantry_items テーブルの行
#[derive(sqlx::FromRow)]
struct PantryItemRow {
   id:         Uuid,
   user_id:    String,
   name:       String,
   quantity:   Option<String>,
   created_at: DateTime<Utc>,
}

impl PantryItemRow {
   /// 行をドメインエンティティに変換する
   ///
   /// DB に保存された値がドメインの制約を満たさない場合（空の user_id など）は
   /// [`InfraError`] の Unexpected として返す。
   fn into_entity(self) -> Result<PantryItem, InfraError> {
      let owner_id =
         OwnerId::new(self.user_id).map_err(|e| InfraError::unexpected(e.to_string()))?;
      let name = ItemName::new(self.name).map_err(|e| InfraError::unexpected(e.to_string()))?;

      Ok(PantryItem::from_db(
         PantryItemId::from_uuid(self.id),
         owner_id,
         name,
         self.quantity,
         self.created_at,
      ))
   }
}

#[cfg(test)]
mod tests {
   use super::*;

   #[test]
   fn test_リポジトリはsendとsyncを実装している() {
      fn assert_send_sync<T: Send + Sync>() {}
      assert_send_sync::<PostgresPantryItemRepository>();
      assert_send_sync::<Box<dyn PantryItemRepository>>();
   }
}
