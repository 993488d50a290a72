//! # リポジトリ
//!
//! 各ストアのトレイトと、そのインメモリ実装を提供する。
//!
//! | トレイト | 実装 | 役割 |
//! |----------|------|------|
//! | [`ContactRepository`] | [`InMemoryContactRepository`] | 連絡先ディレクトリ |
//! | [`SentMessageRepository`] | [`InMemorySentMessageRepository`] | 送信記録（追記のみ） |
//! | [`DraftRepository`] | [`InMemoryDraftRepository`] | 下書き |

pub mod contact_repository;
pub mod draft_repository;
pub mod sent_message_repository;

pub use contact_repository::{ContactRepository, InMemoryContactRepository};
pub use draft_repository::{DraftRepository, InMemoryDraftRepository};
pub use sent_message_repository::{InMemorySentMessageRepository, SentMessageRepository};
