//! # pantryplate-infra
//!
//! PantryToPlate のインフラストラクチャ層。永続化などの技術的関心事を扱う。
//!
//! ## 責務
//!
//! - PostgreSQL への接続プール管理とマイグレーション
//! - リポジトリトレイトとその PostgreSQL 実装
//! - インフラ層のエラー型
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain → shared
//! ```
//!
//! ドメイン層はこのクレートに依存しない。リポジトリトレイトはインフラ層に
//! 定義し、API 層が `Arc<dyn PantryItemRepository>` として注入する。
//!
//! ## モジュール構成
//!
//! - [`db`]: 接続プールの生成とマイグレーション実行
//! - [`error`]: インフラ層のエラー型（[`InfraError`]）
//! - [`repository`]: リポジトリトレイトと実装

pub mod db;
pub mod error;
pub mod repository;

pub use error::InfraError;
