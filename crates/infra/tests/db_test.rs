//! DB コネクション管理の統合テスト
//!
//! 実行中の PostgreSQL が必要なため、デフォルトでは無視される。
//!
//! 実行方法:
//! ```bash
//! # DATABASE_URL を設定した上で（.env でも可）
//! cargo test -p pantryplate-infra --test db_test -- --ignored
//! ```

use pantryplate_infra::db;

/// テスト用の DATABASE_URL
fn database_url() -> String {
   dotenvy::dotenv().ok();
   std::env::var("DATABASE_URL").expect("DATABASE_URL must be set (check .env)")
}

#[tokio::test]
#[ignore = "PostgreSQL が必要（DATABASE_URL を設定して --ignored で実行）"]
async fn test_create_poolで接続してクエリを実行できる() {
   let pool = db::create_pool(&database_url()).await.unwrap();

   db::ping(&pool).await.unwrap();

   let row: (i32,) = sqlx::query_as("SELECT 40 + 2")
      .fetch_one(&pool)
      .await
      .unwrap();
   assert_eq!(row.0, 42);
}

#[tokio::test]
#[ignore = "PostgreSQL が必要（DATABASE_URL を設定して --ignored で実行）"]
async fn test_run_migrationsは再実行しても冪等() {
   let pool = db::create_pool(&database_url()).await.unwrap();

   // 2回実行してもエラーにならない（適用済みはスキップされる）
   db::run_migrations(&pool).await.unwrap();
   db::run_migrations(&pool).await.unwrap();
}
