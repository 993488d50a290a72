//! # エラーレスポンス（RFC 9457 Problem Details）
//!
//! `{type, title, status, detail}` 形式のエラー本文。
//! axum への変換は api クレートで行い、ここはデータ構造だけを持つ。
//!
//! `already-exists` と `validation-error` はどちらも 400 のため、
//! クライアントは `status` ではなく `type` で種別を判別する。

use serde::{Deserialize, Serialize};

/// `type` URI の共通部分
const PROBLEM_TYPE_BASE: &str = "https://outreach.example.org/errors";

/// 問題の種別
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProblemKind {
   BadRequest,
   /// 重複登録（409 ではなく 400）
   AlreadyExists,
   NotFound,
   ValidationError,
   InternalError,
}

impl ProblemKind {
   /// `type` URI の末尾
   pub fn slug(self) -> &'static str {
      match self {
         Self::BadRequest => "bad-request",
         Self::AlreadyExists => "already-exists",
         Self::NotFound => "not-found",
         Self::ValidationError => "validation-error",
         Self::InternalError => "internal-error",
      }
   }

   pub fn title(self) -> &'static str {
      match self {
         Self::BadRequest => "Bad Request",
         Self::AlreadyExists => "Already Exists",
         Self::NotFound => "Not Found",
         Self::ValidationError => "Validation Error",
         Self::InternalError => "Internal Server Error",
      }
   }

   pub fn status(self) -> u16 {
      match self {
         Self::BadRequest | Self::AlreadyExists | Self::ValidationError => 400,
         Self::NotFound => 404,
         Self::InternalError => 500,
      }
   }
}

/// エラーレスポンス本文
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
   #[serde(rename = "type")]
   pub error_type: String,
   pub title:      String,
   pub status:     u16,
   pub detail:     String,
}

impl ErrorResponse {
   pub fn new(kind: ProblemKind, detail: impl Into<String>) -> Self {
      Self {
         error_type: format!("{PROBLEM_TYPE_BASE}/{}", kind.slug()),
         title:      kind.title().to_string(),
         status:     kind.status(),
         detail:     detail.into(),
      }
   }

   pub fn bad_request(detail: impl Into<String>) -> Self {
      Self::new(ProblemKind::BadRequest, detail)
   }

   pub fn already_exists(detail: impl Into<String>) -> Self {
      Self::new(ProblemKind::AlreadyExists, detail)
   }

   pub fn not_found(detail: impl Into<String>) -> Self {
      Self::new(ProblemKind::NotFound, detail)
   }

   pub fn validation_error(detail: impl Into<String>) -> Self {
      Self::new(ProblemKind::ValidationError, detail)
   }

   /// 500。detail は常に固定文言で、原因はログにのみ出力する。
   pub fn internal_error() -> Self {
      Self::new(ProblemKind::InternalError, "内部エラーが発生しました")
   }
}
