//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。

use std::env;

/// API サーバーの設定
#[derive(Debug, Clone)]
pub struct ApiConfig {
   /// ポート番号（デフォルト: 8080）
   pub port:         u16,
   /// データベース接続 URL
   pub database_url: String,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, env::VarError> {
      Ok(Self {
         port:         env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT は有効なポート番号である必要があります"),
         database_url: env::var("DATABASE_URL")
            .expect("DATABASE_URL が設定されていません（.env を確認してください）"),
      })
   }
}
