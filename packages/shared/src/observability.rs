//! # ログ出力の初期化
//!
//! `LOG_FORMAT`（`json` / `pretty`）と `RUST_LOG` を読み、
//! `tracing` の subscriber を 1 度だけ登録する。

use std::fmt;

/// `RUST_LOG` が未設定のときのフィルタ
pub const DEFAULT_FILTER: &str = "info,outreach=debug";

/// ログ出力形式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
   /// 1 行 1 イベントの JSON（集約基盤向け）
   Json,
   /// 端末向けの整形出力
   #[default]
   Pretty,
}

impl LogFormat {
   /// `LOG_FORMAT` の値を解釈する
   ///
   /// 大文字小文字と前後の空白は無視する。未知の値は `None`。
   pub fn from_name(name: &str) -> Option<Self> {
      match name.trim().to_ascii_lowercase().as_str() {
         "json" => Some(Self::Json),
         "pretty" => Some(Self::Pretty),
         _ => None,
      }
   }
}

impl fmt::Display for LogFormat {
   fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
      f.write_str(match self {
         Self::Json => "json",
         Self::Pretty => "pretty",
      })
   }
}

/// トレーシング初期化設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TracingConfig {
   /// 初期化ログに出力するサービス名
   pub service_name: String,
   pub log_format:   LogFormat,
   /// `RUST_LOG` の値（未設定なら `None`）
   pub filter:       Option<String>,
   /// 解釈できなかった `LOG_FORMAT` の値
   pub rejected_format: Option<String>,
}

impl TracingConfig {
   pub fn new(service_name: impl Into<String>, log_format: LogFormat) -> Self {
      Self {
         service_name: service_name.into(),
         log_format,
         filter: None,
         rejected_format: None,
      }
   }

   /// プロセスの環境変数から読み込む
   pub fn from_env(service_name: impl Into<String>) -> Self {
      Self::from_lookup(service_name, |name| std::env::var(name).ok())
   }

   /// 任意の参照関数から読み込む
   ///
   /// `LOG_FORMAT` が不正な場合は `Pretty` を使い、値を `rejected_format` に残す。
   /// subscriber の登録前なので、ここでは警告を出さない。
   pub fn from_lookup(
      service_name: impl Into<String>,
      lookup: impl Fn(&str) -> Option<String>,
   ) -> Self {
      let raw_format = lookup("LOG_FORMAT");
      let log_format = raw_format
         .as_deref()
         .map_or(Some(LogFormat::default()), LogFormat::from_name);

      Self {
         service_name: service_name.into(),
         log_format: log_format.unwrap_or_default(),
         filter: lookup("RUST_LOG").filter(|f| !f.trim().is_empty()),
         rejected_format: log_format.is_none().then_some(raw_format).flatten(),
      }
   }

   /// 実際に使うフィルタ文字列
   pub fn filter_directives(&self) -> &str {
      self.filter.as_deref().unwrap_or(DEFAULT_FILTER)
   }
}

/// subscriber を登録する
///
/// フィルタ、JSON または整形の fmt レイヤー、`tracing_error::ErrorLayer` の順に重ねる。
/// `ErrorLayer` により、インフラ層エラーの `SpanTrace` に呼び出し経路が残る。
/// 不正な `RUST_LOG` は [`DEFAULT_FILTER`] に置き換えて警告する。
#[cfg(feature = "observability")]
pub fn init_tracing(config: &TracingConfig) {
   use tracing_subscriber::{EnvFilter, Layer as _, layer::SubscriberExt, util::SubscriberInitExt};

   let (env_filter, filter_error) = match EnvFilter::try_new(config.filter_directives()) {
      Ok(filter) => (filter, None),
      Err(e) => (EnvFilter::new(DEFAULT_FILTER), Some(e)),
   };

   let fmt_layer = match config.log_format {
      LogFormat::Json => tracing_subscriber::fmt::layer()
         .json()
         .flatten_event(true)
         .with_current_span(true)
         .with_span_list(false)
         .boxed(),
      LogFormat::Pretty => tracing_subscriber::fmt::layer().with_target(false).boxed(),
   };

   tracing_subscriber::registry()
      .with(env_filter)
      .with(fmt_layer)
      .with(tracing_error::ErrorLayer::default())
      .init();

   if let Some(value) = &config.rejected_format {
      tracing::warn!(value = %value, "LOG_FORMAT を解釈できないため pretty で出力します");
   }
   if let Some(e) = filter_error {
      tracing::warn!(error = %e, "RUST_LOG を解釈できないため既定のフィルタを使います");
   }
   tracing::debug!(
      service = %config.service_name,
      log_format = %config.log_format,
      filter = config.filter_directives(),
      "トレーシングを初期化しました"
   );
}

#[cfg(test)]
mod tests {
   use std::collections::HashMap;

   use pretty_assertions::assert_eq;

   use super::*;

   fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
      let vars: HashMap<String, String> = vars
         .iter()
         .map(|(k, v)| (k.to_string(), v.to_string()))
         .collect();
      move |name| vars.get(name).cloned()
   }

   #[test]
   fn test_ログ形式の名前は大文字小文字を区別しない() {
      assert_eq!(LogFormat::from_name("json"), Some(LogFormat::Json));
      assert_eq!(LogFormat::from_name(" JSON "), Some(LogFormat::Json));
      assert_eq!(LogFormat::from_name("Pretty"), Some(LogFormat::Pretty));
      assert_eq!(LogFormat::from_name("yaml"), None);
   }

   #[test]
   fn test_未設定なら整形出力と既定のフィルタになる() {
      let config = TracingConfig::from_lookup("outreach-api", lookup(&[]));

      assert_eq!(config, TracingConfig::new("outreach-api", LogFormat::Pretty));
      assert_eq!(config.filter_directives(), DEFAULT_FILTER);
   }

   #[test]
   fn test_環境変数の指定を反映する() {
      let config = TracingConfig::from_lookup(
         "outreach-api",
         lookup(&[("LOG_FORMAT", "json"), ("RUST_LOG", "warn")]),
      );

      assert_eq!(config.log_format, LogFormat::Json);
      assert_eq!(config.filter_directives(), "warn");
      assert_eq!(config.rejected_format, None);
   }

   #[test]
   fn test_不正なログ形式は整形出力にして値を残す() {
      let config = TracingConfig::from_lookup("outreach-api", lookup(&[("LOG_FORMAT", "xml")]));

      assert_eq!(config.log_format, LogFormat::Pretty);
      assert_eq!(config.rejected_format.as_deref(), Some("xml"));
   }

   #[test]
   fn test_空のrust_logは未設定として扱う() {
      let config = TracingConfig::from_lookup("outreach-api", lookup(&[("RUST_LOG", "  ")]));

      assert_eq!(config.filter, None);
   }
}
