//! # PantryToPlate API サーバー
//!
//! パントリー（食材在庫）を管理する REST API。
//!
//! ## 役割
//!
//! - パントリーアイテムの登録・一覧・削除 API を提供する
//! - PostgreSQL への接続プールを管理し、起動時にマイグレーションを適用する
//! - リクエスト ID の採番とカノニカルログラインを出力する
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `PORT` | No | ポート番号（デフォルト: `8080`） |
//! | `DATABASE_URL` | **Yes** | PostgreSQL 接続 URL |
//! | `LOG_FORMAT` | No | ログ出力形式: `json` または `pretty` |
//! | `RUST_LOG` | No | ログフィルタ（例: `info,sqlx=warn`） |
//!
//! ## 起動方法
//!
//! ```bash
//! # 開発環境（.env を読み込む）
//! cargo run -p pantryplate-api
//!
//! # 本番環境
//! PORT=8080 DATABASE_URL=postgres://... cargo run -p pantryplate-api --release
//! ```

mod config;
mod error;
mod handler;

use std::{net::SocketAddr, sync::Arc};

use axum::{
   Router,
   routing::{delete, get},
};
use pantryplate_infra::{
   db,
   repository::{PantryItemRepository, PostgresPantryItemRepository},
};
use pantryplate_shared::{
   canonical_log::CanonicalLogLineLayer,
   observability::{MakeRequestUuidV7, TracingConfig, make_request_span},
};
use tokio::net::TcpListener;
use tower_http::{
   request_id::{PropagateRequestIdLayer, SetRequestIdLayer},
   trace::TraceLayer,
};

use crate::{
   config::ApiConfig,
   handler::{
      DbTestState, PantryItemState, create_pantry_item, db_test, delete_pantry_item, health_check,
      index, list_pantry_items,
   },
};

/// API サーバーのエントリーポイント
#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルから環境変数を読み込む（存在しない場合は無視）
   dotenvy::dotenv().ok();

   // トレーシング初期化
   let tracing_config = TracingConfig::from_env("api");
   pantryplate_shared::observability::init_tracing(tracing_config);
   let _tracing_guard = tracing::info_span!("app", service = "api").entered();

   // 設定読み込み
   let config = ApiConfig::from_env().expect("設定の読み込みに失敗しました");

   tracing::info!("API サーバーを起動します: 0.0.0.0:{}", config.port);

   // データベース接続プールを作成
   let pool = db::create_pool(&config.database_url)
      .await
      .expect("データベース接続に失敗しました");
   db::ping(&pool)
      .await
      .expect("データベースへの疎通確認に失敗しました");
   tracing::info!("データベースに接続しました");

   // マイグレーション実行
   db::run_migrations(&pool)
      .await
      .expect("マイグレーションの実行に失敗しました");
   tracing::info!("マイグレーションを適用しました");

   // DB 疎通確認用 State（pool が move される前に clone）
   let db_test_state = Arc::new(DbTestState { pool: pool.clone() });

   // 依存コンポーネントを初期化
   let repository: Arc<dyn PantryItemRepository> =
      Arc::new(PostgresPantryItemRepository::new(pool));
   let pantry_item_state = Arc::new(PantryItemState { repository });

   // ルーター構築
   let app = Router::new()
      .route("/", get(index))
      .route("/health", get(health_check))
      .merge(
         Router::new()
            .route("/db-test", get(db_test))
            .with_state(db_test_state),
      )
      // パントリーアイテム API
      .merge(
         Router::new()
            .route(
               "/pantry/items",
               get(list_pantry_items).post(create_pantry_item),
            )
            .route("/pantry/items/{id}", delete(delete_pantry_item))
            .with_state(pantry_item_state),
      )
      // リクエスト ID レイヤー（レイヤー順序が重要: 下に書いたものが外側）
      // 1. SetRequestIdLayer（最外）: UUID v7 を採番（クライアント提供値があればそれを使用）
      // 2. TraceLayer: リクエストスパンに request_id を記録し、全ログに注入
      // 3. CanonicalLogLineLayer: リクエスト完了時に 1 行サマリログを出力（スパン内）
      // 4. PropagateRequestIdLayer: レスポンスヘッダーに x-request-id をコピー
      .layer(PropagateRequestIdLayer::x_request_id())
      .layer(CanonicalLogLineLayer)
      .layer(TraceLayer::new_for_http().make_span_with(make_request_span))
      .layer(SetRequestIdLayer::x_request_id(MakeRequestUuidV7));

   // サーバー起動
   let addr: SocketAddr = format!("0.0.0.0:{}", config.port)
      .parse()
      .expect("アドレスのパースに失敗しました");

   let listener = TcpListener::bind(addr).await?;
   tracing::info!("API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
