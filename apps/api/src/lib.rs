//! # Outreach API サーバー
//!
//! 非営利団体の連絡先ディレクトリと、テンプレートメールの送信記録を
//! HTTP/JSON で提供する。
//!
//! ## アーキテクチャ
//!
//! ```text
//! handler（DTO 変換・入力検証） → usecase（オーケストレーション） → infra（ストア）
//!                                        ↓
//!                                     domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`app`] - 依存コンポーネントの組み立てとルーター構築
//! - [`config`] - 環境変数からの設定読み込み
//! - [`error`] - API エラー定義と HTTP レスポンスへの変換
//! - [`handler`] - HTTP リクエストハンドラ
//! - [`seed`] - 起動時のサンプル連絡先
//! - [`usecase`] - ユースケース

pub mod app;
pub mod config;
pub mod error;
pub mod handler;
pub mod seed;
pub mod usecase;
