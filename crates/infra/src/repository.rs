//! リポジトリトレイトと実装。
//!
//! 永続化の操作をトレイトとして定義し、PostgreSQL 実装を提供する。
//!
//! ## 設計方針
//!
//! - **依存性逆転**: API 層はトレイト（`dyn PantryItemRepository`）にのみ
//!   依存し、具体的な実装を知らない
//! - **テスタビリティ**: ハンドラのテストではスタブ実装に差し替えられる

pub mod pantry_item_repository;

pub use pantry_item_repository::{PantryItemRepository, PostgresPantryItemRepository};
