//! # インフラ層エラー定義
//!
//! ストア操作で発生するエラーを表現する。
//!
//! ## 構造
//!
//! `std::io::Error` と同じ struct + enum パターンを採用:
//! - [`InfraError`]: エラー種別（[`InfraErrorKind`]）と [`SpanTrace`] を保持するラッパー
//! - [`InfraErrorKind`]: エラーの具体的な種別
//!
//! convenience constructor でエラーを生成した時点のスパン情報が
//! 自動的にキャプチャされる。

use std::{
   fmt,
   sync::{Mutex, MutexGuard},
};

use derive_more::Display;
use thiserror::Error;
use tracing_error::SpanTrace;

/// インフラ層で発生するエラー
///
/// エラー種別に応じた処理には [`kind()`](InfraError::kind) を使用する:
///
/// ```ignore
/// match error.kind() {
///     InfraErrorKind::Conflict { entity, id } => { /* 重複処理 */ }
///     _ => { /* その他 */ }
/// }
/// ```
#[derive(Display)]
#[display("{kind}")]
pub struct InfraError {
   kind:       InfraErrorKind,
   span_trace: SpanTrace,
}

/// インフラ層エラーの種別
#[derive(Debug, Error)]
pub enum InfraErrorKind {
   /// 一意キーの重複
   ///
   /// 既に同じキーのエントリが存在するストアに挿入しようとした場合。
   /// ユースケース層で `AlreadyExists` に変換する。
   #[error("重複したキーです: {entity}(id={id})")]
   Conflict {
      /// エンティティ名（例: "Contact"）
      entity: String,
      /// 重複したキー
      id:     String,
   },

   /// 予期しないエラー
   ///
   /// ロックの poison など、通常運用では発生しない状態。
   #[error("予期しないエラー: {0}")]
   Unexpected(String),
}

impl InfraError {
   /// エラー種別を取得する
   pub fn kind(&self) -> &InfraErrorKind {
      &self.kind
   }

   /// SpanTrace を取得する
   pub fn span_trace(&self) -> &SpanTrace {
      &self.span_trace
   }

   /// Conflict バリアントの場合、entity と id を返す
   pub fn as_conflict(&self) -> Option<(&str, &str)> {
      match &self.kind {
         InfraErrorKind::Conflict { entity, id } => Some((entity, id)),
         InfraErrorKind::Unexpected(_) => None,
      }
   }

   // ===== Convenience constructors =====

   /// 一意キー重複エラーを生成する
   pub fn conflict(entity: impl Into<String>, id: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Conflict {
            entity: entity.into(),
            id:     id.into(),
         },
         span_trace: SpanTrace::capture(),
      }
   }

   /// 予期しないエラーを生成する
   pub fn unexpected(msg: impl Into<String>) -> Self {
      Self {
         kind:       InfraErrorKind::Unexpected(msg.into()),
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
      self.kind.source()
   }
}

/// ストアのロックを取得する
///
/// poison されたロックは `InfraErrorKind::Unexpected` として呼び出し元に返す。
pub(crate) fn lock<'a, T>(mutex: &'a Mutex<T>, store: &str) -> Result<MutexGuard<'a, T>, InfraError> {
   mutex
      .lock()
      .map_err(|_| InfraError::unexpected(format!("{store} のロックが poison されています")))
}
