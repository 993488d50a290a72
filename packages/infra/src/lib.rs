//! # Outreach インフラ層
//!
//! 連絡先ディレクトリ、送信記録、下書きの各ストアを提供する。
//!
//! ## 設計方針
//!
//! - **リポジトリトレイト**: ユースケース層は `Arc<dyn Trait>` 経由でのみストアに触れる
//! - **インメモリ実装**: 永続化は行わない。プロセス終了とともに破棄される
//! - **ストアごとのロック**: 各ストアは自身のコレクションを `Mutex` で保護し、
//!   ロックを `.await` をまたいで保持しない
//!
//! ## 依存関係
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ## モジュール構成
//!
//! - [`error`] - インフラ層エラー定義
//! - [`repository`] - リポジトリトレイトとインメモリ実装

pub mod error;
pub mod repository;

pub use error::{InfraError, InfraErrorKind};
