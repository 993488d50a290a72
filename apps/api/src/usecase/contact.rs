//! 連絡先ディレクトリのユースケース

use std::sync::Arc;

use outreach_domain::{DomainError, contact::Contact, email::Email};
use outreach_infra::repository::ContactRepository;

use crate::error::ApiError;

/// 連絡先登録の入力
pub struct CreateContactInput {
   pub name:    String,
   pub address: String,
   pub email:   Email,
}

/// 連絡先ユースケース
pub struct ContactUseCaseImpl {
   contact_repository: Arc<dyn ContactRepository>,
}

impl ContactUseCaseImpl {
   pub fn new(contact_repository: Arc<dyn ContactRepository>) -> Self {
      Self { contact_repository }
   }

   /// 連絡先を登録する
   ///
   /// 同じメールアドレスが登録済みの場合は `AlreadyExists`。既存の連絡先は変更されない。
   pub async fn create_contact(&self, input: CreateContactInput) -> Result<Contact, ApiError> {
      let contact = Contact::new(input.name, input.address, input.email)?;

      self
         .contact_repository
         .insert(&contact)
         .await
         .map_err(|e| match e.as_conflict() {
            Some((_, id)) => ApiError::from(DomainError::AlreadyExists {
               entity_type: "Contact",
               id:          id.to_string(),
            }),
            None => ApiError::Infra(e),
         })?;

      tracing::info!(email = %contact.email(), "連絡先を登録しました");
      Ok(contact)
   }

   /// メールアドレスで連絡先を取得する
   pub async fn get_contact(&self, email: &Email) -> Result<Contact, ApiError> {
      self
         .contact_repository
         .find_by_email(email)
         .await?
         .ok_or_else(|| {
            DomainError::NotFound {
               entity_type: "Contact",
               id:          email.to_string(),
            }
            .into()
         })
   }

   /// 連絡先の一覧を取得する
   ///
   /// `domain` を指定した場合は、メールアドレスのドメイン部が一致するものに限る。
   pub async fn list_contacts(&self, domain: Option<&str>) -> Result<Vec<Contact>, ApiError> {
      Ok(self.contact_repository.find_all(domain).await?)
   }
}
