//! # Outreach API サーバー
//!
//! 非営利団体の連絡先ディレクトリ、テンプレートメールの送信記録、
//! 下書きを HTTP/JSON で提供する。
//!
//! ストアはすべてインメモリで、再起動すると内容は失われる。
//!
//! ## 環境変数
//!
//! | 変数名 | 必須 | 説明 |
//! |--------|------|------|
//! | `OUTREACH_HOST` | No | バインドアドレス（デフォルト: `0.0.0.0`） |
//! | `OUTREACH_PORT` | No | ポート番号（デフォルト: `8000`） |
//! | `OUTREACH_SEED_SAMPLE_CONTACTS` | No | サンプル連絡先の登録（デフォルト: `true`） |
//! | `LOG_FORMAT` | No | `json` または `pretty`（デフォルト: `pretty`） |
//! | `RUST_LOG` | No | ログフィルタ（デフォルト: `info,outreach=debug`） |
//!
//! ## 起動方法
//!
//! ```bash
//! cargo run -p outreach-api
//!
//! OUTREACH_PORT=3000 LOG_FORMAT=json cargo run -p outreach-api --release
//! ```

use std::net::SocketAddr;

use anyhow::Context as _;
use outreach_api::{
   app::{AppDependencies, build_router},
   config::ApiConfig,
   seed::seed_sample_contacts,
};
use outreach_shared::observability::{TracingConfig, init_tracing};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
   // .env ファイルを読み込む（存在する場合）
   dotenvy::dotenv().ok();

   init_tracing(&TracingConfig::from_env("outreach-api"));

   let config = ApiConfig::from_env().context("設定の読み込みに失敗しました")?;

   tracing::info!(
      "Outreach API サーバーを起動します: {}:{}",
      config.host,
      config.port
   );

   let deps = AppDependencies::default();
   if config.seed_sample_contacts {
      seed_sample_contacts(deps.contact_repository.as_ref())
         .await
         .context("サンプル連絡先の登録に失敗しました")?;
   }

   let app = build_router(&deps);

   let addr: SocketAddr = format!("{}:{}", config.host, config.port)
      .parse()
      .context("バインドアドレスが不正です")?;
   let listener = TcpListener::bind(addr)
      .await
      .with_context(|| format!("{addr} にバインドできませんでした"))?;
   tracing::info!("Outreach API サーバーが起動しました: {}", addr);

   axum::serve(listener, app).await?;

   Ok(())
}
