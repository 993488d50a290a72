//! # 送信ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /send-email` - コンポジションの即時送信
//! - `POST /drafts/{id}/send` - 下書きの送信
//! - `GET /sent-emails` - 送信記録の参照（`?to=` `?cc=` で絞り込み）

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State},
   http::StatusCode,
   response::IntoResponse,
};
use outreach_domain::message::{RenderedMessage, SentMessageFilter};
use outreach_shared::ApiResponse;
use serde::{Deserialize, Serialize};

use super::composition::{ComposeRequest, parse_email};
use crate::{
   error::ApiError,
   usecase::{EmailUseCaseImpl, parse_draft_id},
};

/// 送信 API の共有状態
pub struct EmailState {
   pub usecase: EmailUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 送信記録の絞り込み条件
#[derive(Debug, Deserialize)]
pub struct SentEmailsQuery {
   pub to: Option<String>,
   pub cc: Option<String>,
}

/// 送信完了の確認 DTO
#[derive(Debug, Serialize)]
pub struct SendResultDto {
   pub message: String,
   /// 記録されたメッセージ数
   pub sent:    usize,
}

impl SendResultDto {
   fn new(sent: usize) -> Self {
      Self {
         message: "Emails sent successfully.".to_string(),
         sent,
      }
   }
}

/// 送信済みメッセージ DTO
#[derive(Debug, Serialize)]
pub struct SentMessageDto {
   pub to:        String,
   pub cc:        Vec<String>,
   pub body:      String,
   pub timestamp: String,
}

impl From<RenderedMessage> for SentMessageDto {
   fn from(message: RenderedMessage) -> Self {
      Self {
         to:        message.to().to_string(),
         cc:        message.cc().iter().map(ToString::to_string).collect(),
         body:      message.body().to_string(),
         timestamp: message.sent_at().to_rfc3339(),
      }
   }
}

// --- ハンドラ ---

/// POST /send-email
///
/// ## レスポンス
///
/// - `200 OK`: 送信件数
/// - `400 Bad Request`: アドレス不正、テンプレート不正
/// - `404 Not Found`: 連絡先に存在しない宛先（最初の 1 件を示す）
pub async fn send_email(
   State(state): State<Arc<EmailState>>,
   Json(req): Json<ComposeRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let composition = req.into_composition()?;

   let sent = state.usecase.send_now(&composition).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(SendResultDto::new(sent)))))
}

/// POST /drafts/{id}/send
///
/// 成功時は下書きを削除する。失敗時は下書きも送信記録も変更しない。
///
/// ## レスポンス
///
/// - `200 OK`: 送信件数
/// - `400 Bad Request`: テンプレート不正
/// - `404 Not Found`: 下書き、または宛先の連絡先が存在しない
pub async fn send_draft(
   State(state): State<Arc<EmailState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let draft_id = parse_draft_id(&id)?;

   let sent = state.usecase.send_draft(&draft_id).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(SendResultDto::new(sent)))))
}

/// GET /sent-emails
///
/// 送信順で返す。`to` と `cc` を両方指定した場合は両方に一致するものに限る。
pub async fn list_sent_emails(
   State(state): State<Arc<EmailState>>,
   Query(query): Query<SentEmailsQuery>,
) -> Result<impl IntoResponse, ApiError> {
   let filter = SentMessageFilter {
      to: query.to.as_deref().map(parse_email).transpose()?,
      cc: query.cc.as_deref().map(parse_email).transpose()?,
   };

   let messages = state.usecase.list_sent_messages(&filter).await?;

   let items: Vec<SentMessageDto> = messages.into_iter().map(SentMessageDto::from).collect();
   Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}
