//! # ユースケース層
//!
//! ## 設計方針
//!
//! - **依存性注入**: ストアを `Arc<dyn Trait>` で外部から注入
//! - **薄いハンドラ**: ハンドラは入力検証と DTO 変換のみ行い、ロジックはユースケースに集約
//! - **送信の直列化**: 送信と下書き削除は [`SendLock`] で直列化し、
//!   同じ下書きの二重送信や一括追記の交錯を防ぐ
//!
//! ## モジュール構成
//!
//! - `contact`: 連絡先の登録・参照
//! - `draft`: 下書きの保存・参照・破棄
//! - `email`: 即時送信、下書き送信、送信記録の参照

pub mod contact;
pub mod draft;
pub mod email;

use std::sync::Arc;

pub use contact::{ContactUseCaseImpl, CreateContactInput};
pub use draft::DraftUseCaseImpl;
pub use email::EmailUseCaseImpl;
use outreach_domain::draft::DraftId;

use crate::error::ApiError;

/// 送信操作を直列化するロック
///
/// `EmailUseCaseImpl` と `DraftUseCaseImpl` で同じインスタンスを共有する。
pub type SendLock = Arc<tokio::sync::Mutex<()>>;

/// 下書き ID の文字列表現を解釈する
///
/// 不正な形式の ID は存在しない ID と同じく `NotFound` として扱う。
pub(crate) fn parse_draft_id(id: &str) -> Result<DraftId, ApiError> {
    DraftId::parse(id).ok_or_else(|| draft_not_found(id))
}

pub(crate) fn draft_not_found(id: impl std::fmt::Display) -> ApiError {
    ApiError::NotFound(format!("Draft が見つかりません: {id}"))
}
