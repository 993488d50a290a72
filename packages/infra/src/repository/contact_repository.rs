//! # ContactRepository
//!
//! 連絡先ディレクトリ。メールアドレスをキーとし、挿入順を保持する。
//! 更新・削除の操作は持たない。

use std::sync::Mutex;

use async_trait::async_trait;
use outreach_domain::{contact::Contact, email::Email};

use crate::error::{InfraError, lock};

/// 連絡先リポジトリトレイト
#[async_trait]
pub trait ContactRepository: Send + Sync {
   /// 連絡先を挿入する
   ///
   /// 同じメールアドレスが既に存在する場合は `InfraErrorKind::Conflict` を返し、
   /// 既存のエントリは変更しない。
   async fn insert(&self, contact: &Contact) -> Result<(), InfraError>;

   /// メールアドレスで連絡先を検索する
   async fn find_by_email(&self, email: &Email) -> Result<Option<Contact>, InfraError>;

   /// 複数のメールアドレスで連絡先を一括検索する
   ///
   /// 存在するものだけを返す。1 回のロック取得で解決する。
   async fn find_by_emails(&self, emails: &[Email]) -> Result<Vec<Contact>, InfraError>;

   /// 連絡先の一覧を挿入順で取得する
   ///
   /// `domain` を指定した場合は、メールアドレスのドメイン部が一致するものに限る。
   async fn find_all(&self, domain: Option<&str>) -> Result<Vec<Contact>, InfraError>;
}

/// インメモリ実装の ContactRepository
#[derive(Debug, Default)]
pub struct InMemoryContactRepository {
   contacts: Mutex<Vec<Contact>>,
}

impl InMemoryContactRepository {
   pub fn new() -> Self {
      Self::default()
   }
}

#[async_trait]
impl ContactRepository for InMemoryContactRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(email = %contact.email()))]
   async fn insert(&self, contact: &Contact) -> Result<(), InfraError> {
      let mut contacts = lock(&self.contacts, "ContactRepository")?;
      if contacts.iter().any(|c| c.email() == contact.email()) {
         return Err(InfraError::conflict("Contact", contact.email().as_str()));
      }
      contacts.push(contact.clone());
      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(email = %email))]
   async fn find_by_email(&self, email: &Email) -> Result<Option<Contact>, InfraError> {
      let contacts = lock(&self.contacts, "ContactRepository")?;
      Ok(contacts.iter().find(|c| c.email() == email).cloned())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(count = emails.len()))]
   async fn find_by_emails(&self, emails: &[Email]) -> Result<Vec<Contact>, InfraError> {
      let contacts = lock(&self.contacts, "ContactRepository")?;
      Ok(contacts
         .iter()
         .filter(|c| emails.contains(c.email()))
         .cloned()
         .collect())
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self, domain: Option<&str>) -> Result<Vec<Contact>, InfraError> {
      let contacts = lock(&self.contacts, "ContactRepository")?;
      Ok(contacts
         .iter()
         .filter(|c| domain.is_none_or(|d| c.belongs_to_domain(d)))
         .cloned()
         .collect())
   }
}
