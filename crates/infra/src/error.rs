//! インフラストラクチャ層のエラー型。
//!
//! データベースアクセスなど、技術的な操作の失敗を表す。発生箇所を追跡
//! できるよう、エラー生成時点の [`SpanTrace`] を必ず併せて記録する。
//!
//! ## SpanTrace とは
//!
//! [`tracing_error::SpanTrace`] は、エラー発生時にアクティブだった
//! tracing スパンの階層を記録したもの。バックトレースがスタックフレームを
//! 記録するのに対し、SpanTrace は「どのリクエストのどの処理中か」という
//! 論理的な文脈を記録する。非同期コードではスタックフレームが実行時に
//! 分断されるため、こちらの方が調査に役立つ。
//!
//! SpanTrace を取得するには、サブスクライバに [`tracing_error::ErrorLayer`]
//! が登録されている必要がある（`pantryplate_shared::init_tracing` が行う）。

use std::fmt;

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層のエラー。
///
/// エラーの種別（[`InfraErrorKind`]）と発生時点のスパン文脈
/// （[`SpanTrace`]）を保持する。`sqlx::Error` からは `From` で変換できる
/// ため、リポジトリ実装では `?` をそのまま使える。
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別。
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// データベース操作の失敗（接続、クエリ実行など）。
   #[error("データベースエラー: {0}")]
   Database(#[source] sqlx::Error),

   /// 想定外の状態。DB に保存された値がドメインの制約を満たさない場合など。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// エラー種別への参照を返す。
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// エラー発生時点のスパン文脈を返す。
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// 想定外の状態を表すエラーを生成する。
   ///
   /// 呼び出し時点の [`SpanTrace`] を記録する。
   pub fn unexpected(message: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(message.into()),
         span_trace: SpanTrace::capture(),
      }
   }
}

impl fmt::Debug for InfraError {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.debug_struct("InfraError")
         .field("kind", &self.kind)
         .field("span_trace", &self.span_trace)
         .finish()
   }
}

impl std::error::Error for InfraError {
   fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
      std::error::Error::source(&self.kind)
   }
}

impl From<sqlx::Error> for InfraError {
   fn from(e: sqlx::Error) -> Self {
      Self {
         kind:       InfraErrorKind::Database(e),
         span_trace: SpanTrace::capture(),
      }
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;
   use tracing_subscriber::layer::SubscriberExt;

   use super::*;

   /// ErrorLayer を登録したサブスクライバの下でテスト本体を実行する。
   ///
   /// SpanTrace の取得には ErrorLayer が必要なため、スパン文脈を検証する
   /// テストはこのヘルパー経由で実行する。
   fn with_error_layer(f: impl FnOnce()) {
      let subscriber = tracing_subscriber::registry().with(tracing_error::ErrorLayer::default());
      let _guard = tracing::subscriber::set_default(subscriber);
      f();
   }

   // ===== From<sqlx::Error> テスト =====

   #[test]
   fn test_sqlx_errorから変換できる() {
      // Given: sqlx のエラー
      let sqlx_error = sqlx::Error::RowNotFound;

      // When: InfraError に変換する
      let error = InfraError::from(sqlx_error);

      // Then: Database 種別になる
      assert!(matches!(error.kind(), InfraErrorKind::Database(_)));
   }

   #[test]
   fn test_スパン内で生成するとスパン名が記録される() {
      with_error_layer(|| {
         // Given: アクティブなスパン
         let span = tracing::info_span!("insert_pantry_item");
         let _enter = span.enter();

         // When: スパン内でエラーを生成する
         let error = InfraError::from(sqlx::Error::RowNotFound);

         // Then: SpanTrace にスパン名が含まれる
         let trace = format!("{}", error.span_trace());
         assert!(trace.contains("insert_pantry_item"));
      });
   }

   // ===== unexpected テスト =====

   #[test]
   fn test_unexpectedでメッセージ付きエラーを生成できる() {
      let error = InfraError::unexpected("DB の user_id が空");

      assert!(matches!(error.kind(), InfraErrorKind::Unexpected(_)));
      assert_eq!(error.to_string(), "予期しないエラー: DB の user_id が空");
   }

   // ===== Display / source テスト =====

   #[test]
   fn test_displayは種別のメッセージを表示する() {
      let error = InfraError::from(sqlx::Error::RowNotFound);

      assert!(error.to_string().starts_with("データベースエラー:"));
   }

   #[test]
   fn test_sourceで元のsqlxエラーを辿れる() {
      use std::error::Error;

      let error = InfraError::from(sqlx::Error::RowNotFound);

      let source = error.source().expect("source があるはず");
      assert!(source.is::<sqlx::Error>());
   }

   #[test]
   fn test_unexpectedはsourceを持たない() {
      use std::error::Error;

      let error = InfraError::unexpected("検証用");

      assert!(error.source().is_none());
   }
}
