//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置
//! - 親モジュールで re-export し、フラットな API を提供
//! - ハンドラは薄く保ち、永続化はリポジトリ層に委譲
//!
//! ## ハンドラ一覧
//!
//! - `health`: ルート・ヘルスチェック・DB 疎通確認
//! - `pantry_item`: パントリーアイテムの CRUD

pub mod health;
pub mod pantry_item;

pub use health::{DbTestState, db_test, health_check, index};
pub use pantry_item::{PantryItemState, create_pantry_item, delete_pantry_item, list_pantry_items};
