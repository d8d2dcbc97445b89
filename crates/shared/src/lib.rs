//! # PantryToPlate 共有クレート
//!
//! すべてのクレートから参照される横断的な型・ユーティリティを提供する。
//!
//! ## 設計方針
//!
//! - 他のすべてのクレート（api / infra / domain）から依存される
//! - ビジネスロジックを含まない純粋なユーティリティのみを置く
//! - 外部クレートへの依存は最小限に保つ（observability 関連は feature で分離）
//!
//! ## モジュール構成
//!
//! - [`error_response`]: API 共通のエラーレスポンス形式
//! - [`health`]: ヘルスチェックのレスポンス型
//! - [`observability`]: トレーシング初期化とリクエスト ID（`observability` feature）
//! - `canonical_log`: リクエスト完了サマリログ（`observability` feature）

#[cfg(feature = "observability")]
pub mod canonical_log;
pub mod error_response;
pub mod health;
pub mod observability;

pub use error_response::ErrorResponse;
pub use health::HealthResponse;
