//! # API サーバー設定
//!
//! 環境変数から API サーバーの設定を読み込む。
//!
//! ## 環境変数一覧
//!
//! | 変数名 | 必須 | デフォルト | 説明 |
//! |--------|------|------------|------|
//! | `OUTREACH_HOST` | No | `0.0.0.0` | バインドアドレス |
//! | `OUTREACH_PORT` | No | `8000` | ポート番号 |
//! | `OUTREACH_SEED_SAMPLE_CONTACTS` | No | `true` | 起動時にサンプル連絡先を登録するか |
//!
//! ログ関連（`LOG_FORMAT`, `RUST_LOG`）は
//! [`outreach_shared::observability::TracingConfig`] が読み込む。

use std::env;

use thiserror::Error;

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// 設定読み込みのエラー
#[derive(Debug, Error)]
pub enum ConfigError {
   #[error("{name} は有効なポート番号である必要があります: {value}")]
   InvalidPort { name: &'static str, value: String },

   #[error("{name} は true/false/1/0 のいずれかである必要があります: {value}")]
   InvalidBool { name: &'static str, value: String },
}

/// API サーバーの設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
   /// バインドアドレス
   pub host: String,
   /// ポート番号
   pub port: u16,
   /// 起動時にサンプル連絡先を登録するか
   pub seed_sample_contacts: bool,
}

impl ApiConfig {
   /// 環境変数から設定を読み込む
   pub fn from_env() -> Result<Self, ConfigError> {
      Self::from_lookup(|name| env::var(name).ok())
   }

   /// 任意の参照関数から設定を読み込む
   ///
   /// 未設定の変数はデフォルト値を使う。
   pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
      let host = lookup("OUTREACH_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

      let port = match lookup("OUTREACH_PORT") {
         Some(value) => value.trim().parse().map_err(|_| ConfigError::InvalidPort {
            name: "OUTREACH_PORT",
            value,
         })?,
         None => DEFAULT_PORT,
      };

      let seed_sample_contacts = match lookup("OUTREACH_SEED_SAMPLE_CONTACTS") {
         Some(value) => parse_bool("OUTREACH_SEED_SAMPLE_CONTACTS", value)?,
         None => true,
      };

      Ok(Self {
         host,
         port,
         seed_sample_contacts,
      })
   }
}

fn parse_bool(name: &'static str, value: String) -> Result<bool, ConfigError> {
   match value.trim().to_ascii_lowercase().as_str() {
      "true" | "1" => Ok(true),
      "false" | "0" => Ok(false),
      _ => Err(ConfigError::InvalidBool { name, value }),
   }
}
