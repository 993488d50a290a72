//! # 下書きハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /drafts` - 下書きの保存
//! - `GET /drafts` - 下書きの一覧
//! - `GET /drafts/{id}` - 下書きの取得
//! - `DELETE /drafts/{id}` - 下書きの破棄
//!
//! 下書きの送信は [`super::email::send_draft`] を参照。

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, State},
   http::StatusCode,
   response::IntoResponse,
};
use outreach_domain::draft::Draft;
use outreach_shared::ApiResponse;
use serde::Serialize;

use super::composition::ComposeRequest;
use crate::{error::ApiError, usecase::DraftUseCaseImpl};

/// 下書き API の共有状態
pub struct DraftState {
   pub usecase: DraftUseCaseImpl,
}

/// 下書き DTO
#[derive(Debug, Serialize)]
pub struct DraftDto {
   pub id:         String,
   pub template:   String,
   pub emails:     Vec<String>,
   pub cc:         Vec<String>,
   pub created_at: String,
   pub status:     &'static str,
}

impl From<Draft> for DraftDto {
   fn from(draft: Draft) -> Self {
      let recipients = draft.recipients();
      Self {
         id:         draft.id().to_string(),
         template:   draft.template().to_string(),
         emails:     recipients.to().iter().map(ToString::to_string).collect(),
         cc:         recipients.cc().iter().map(ToString::to_string).collect(),
         created_at: draft.created_at().to_rfc3339(),
         status:     draft.status().into(),
      }
   }
}

/// POST /drafts
///
/// 宛先の存在やテンプレートは送信時に検証する。ここではアドレスの形式のみ検証する。
///
/// ## レスポンス
///
/// - `201 Created`: 保存された下書き
/// - `400 Bad Request`: アドレス不正
pub async fn save_draft(
   State(state): State<Arc<DraftState>>,
   Json(req): Json<ComposeRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let composition = req.into_composition()?;

   let draft = state.usecase.save_draft(composition).await?;

   Ok((StatusCode::CREATED, Json(ApiResponse::new(DraftDto::from(draft)))))
}

/// GET /drafts
pub async fn list_drafts(
   State(state): State<Arc<DraftState>>,
) -> Result<impl IntoResponse, ApiError> {
   let drafts = state.usecase.list_drafts().await?;

   let items: Vec<DraftDto> = drafts.into_iter().map(DraftDto::from).collect();
   Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /drafts/{id}
///
/// 存在しない ID、送信済みの ID、形式が不正な ID はいずれも 404。
pub async fn get_draft(
   State(state): State<Arc<DraftState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let draft = state.usecase.get_draft(&id).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(DraftDto::from(draft)))))
}

/// DELETE /drafts/{id}
///
/// ## レスポンス
///
/// - `204 No Content`: 破棄完了
/// - `404 Not Found`: 下書きが存在しない
pub async fn delete_draft(
   State(state): State<Arc<DraftState>>,
   Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   state.usecase.delete_draft(&id).await?;

   Ok(StatusCode::NO_CONTENT)
}
