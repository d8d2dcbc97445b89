//! # PantryToPlate ドメイン層
//!
//! パントリー管理のエンティティ・値オブジェクト・ドメインエラーを定義する。
//!
//! ## 設計方針
//!
//! - **外部依存を持たない**: データベースや HTTP の知識を持ち込まない
//! - **Newtype による型安全性**: ID や検証済み文字列を専用型で表現し、
//!   取り違えをコンパイル時に排除する
//! - **生成時バリデーション**: 不正な値を持つインスタンスが存在できない
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain → shared
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`]: ドメインエラー型
//! - [`pantry_item`]: パントリーアイテムのエンティティと値オブジェクト
//!
//! ## 使用例
//!
//! ```rust
//! use pantryplate_domain::pantry_item::{ItemName, OwnerId};
//!
//! let owner_id = OwnerId::new("demo_user").unwrap();
//! let name = ItemName::new("Milk").unwrap();
//! assert_eq!(name.as_str(), "Milk");
//! ```

#[macro_use]
mod macros;

pub mod error;
pub mod pantry_item;

pub use error::DomainError;

/// PII フィールドの Debug 出力に使うマスク文字列
pub const REDACTED: &str = "[REDACTED]";
