//! # API エラー定義
//!
//! ユースケースで発生するエラーと、HTTP レスポンスへの変換を定義する。
//!
//! | エラー | HTTP ステータス | `type` |
//! |--------|----------------|--------|
//! | `AlreadyExists` | 400 | `already-exists` |
//! | `Validation` | 400 | `validation-error` |
//! | `BadRequest` | 400 | `bad-request` |
//! | `NotFound` | 404 | `not-found` |
//! | `Infra` / `Internal` | 500 | `internal-error` |

use axum::{
   Json,
   http::StatusCode,
   response::{IntoResponse, Response},
};
use outreach_domain::DomainError;
use outreach_infra::InfraError;
use outreach_shared::ErrorResponse;
use thiserror::Error;

/// API で発生するエラー
#[derive(Debug, Error)]
pub enum ApiError {
   /// リソースが見つからない
   #[error("リソースが見つかりません: {0}")]
   NotFound(String),

   /// 重複登録
   #[error("既に存在します: {0}")]
   AlreadyExists(String),

   /// 入力値の検証失敗
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// 不正なリクエスト（テンプレートエラーなど）
   #[error("不正なリクエスト: {0}")]
   BadRequest(String),

   /// ストアのエラー
   #[error("ストアエラー: {0}")]
   Infra(#[from] InfraError),

   /// 内部エラー
   #[error("内部エラー: {0}")]
   Internal(String),
}

impl From<DomainError> for ApiError {
   fn from(err: DomainError) -> Self {
      match err {
         DomainError::Validation(msg) => Self::Validation(msg),
         DomainError::NotFound { .. } => Self::NotFound(err.to_string()),
         DomainError::AlreadyExists { .. } => Self::AlreadyExists(err.to_string()),
         DomainError::Template(e) => Self::BadRequest(e.to_string()),
      }
   }
}

impl ApiError {
   fn to_error_response(&self) -> ErrorResponse {
      match self {
         ApiError::NotFound(msg) => ErrorResponse::not_found(msg),
         ApiError::AlreadyExists(msg) => ErrorResponse::already_exists(msg),
         ApiError::Validation(msg) => ErrorResponse::validation_error(msg),
         ApiError::BadRequest(msg) => ErrorResponse::bad_request(msg),
         ApiError::Infra(e) => {
            tracing::error!(error = %e, span_trace = %e.span_trace(), "ストアエラー");
            ErrorResponse::internal_error()
         }
         ApiError::Internal(msg) => {
            tracing::error!("内部エラー: {}", msg);
            ErrorResponse::internal_error()
         }
      }
   }
}

impl IntoResponse for ApiError {
   fn into_response(self) -> Response {
      let body = self.to_error_response();
      let status =
         StatusCode::from_u16(body.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

      (status, Json(body)).into_response()
   }
}
