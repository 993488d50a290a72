//! # 連絡先ハンドラ
//!
//! ## エンドポイント
//!
//! - `POST /nonprofits` - 連絡先の登録
//! - `GET /nonprofits` - 連絡先の一覧（`?domain=` でドメイン絞り込み）
//! - `GET /nonprofits/{email}` - 連絡先の取得

use std::sync::Arc;

use axum::{
   Json,
   extract::{Path, Query, State},
   http::StatusCode,
   response::IntoResponse,
};
use outreach_domain::contact::Contact;
use outreach_shared::{ApiResponse, MessageResponse};
use serde::{Deserialize, Serialize};

use super::composition::parse_email;
use crate::{
   error::ApiError,
   usecase::{ContactUseCaseImpl, CreateContactInput},
};

/// 連絡先 API の共有状態
pub struct ContactState {
   pub usecase: ContactUseCaseImpl,
}

// --- リクエスト/レスポンス型 ---

/// 連絡先登録リクエスト
#[derive(Debug, Deserialize)]
pub struct CreateContactRequest {
   pub name:    String,
   pub address: String,
   pub email:   String,
}

/// ドメイン絞り込みのクエリパラメータ
#[derive(Debug, Deserialize)]
pub struct ContactListQuery {
   pub domain: Option<String>,
}

/// 連絡先 DTO
#[derive(Debug, Serialize)]
pub struct ContactDto {
   pub name:    String,
   pub address: String,
   pub email:   String,
}

impl From<Contact> for ContactDto {
   fn from(contact: Contact) -> Self {
      Self {
         name:    contact.name().to_string(),
         address: contact.address().to_string(),
         email:   contact.email().to_string(),
      }
   }
}

// --- ハンドラ ---

/// POST /nonprofits
///
/// ## レスポンス
///
/// - `201 Created`: 登録完了メッセージ
/// - `400 Bad Request`: メールアドレス重複（`already-exists`）、入力値不正
pub async fn create_contact(
   State(state): State<Arc<ContactState>>,
   Json(req): Json<CreateContactRequest>,
) -> Result<impl IntoResponse, ApiError> {
   let input = CreateContactInput {
      name:    req.name,
      address: req.address,
      email:   parse_email(&req.email)?,
   };

   state.usecase.create_contact(input).await?;

   let response = ApiResponse::new(MessageResponse::new("Nonprofit created successfully."));
   Ok((StatusCode::CREATED, Json(response)))
}

/// GET /nonprofits
///
/// 登録順で返す。`domain` はメールアドレスの `@` 以降と大文字小文字を区別せずに比較する。
pub async fn list_contacts(
   State(state): State<Arc<ContactState>>,
   Query(query): Query<ContactListQuery>,
) -> Result<impl IntoResponse, ApiError> {
   let contacts = state.usecase.list_contacts(query.domain.as_deref()).await?;

   let items: Vec<ContactDto> = contacts.into_iter().map(ContactDto::from).collect();
   Ok((StatusCode::OK, Json(ApiResponse::new(items))))
}

/// GET /nonprofits/{email}
pub async fn get_contact(
   State(state): State<Arc<ContactState>>,
   Path(email): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
   let email = parse_email(&email)?;
   let contact = state.usecase.get_contact(&email).await?;

   Ok((StatusCode::OK, Json(ApiResponse::new(ContactDto::from(contact)))))
}
