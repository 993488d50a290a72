//! # DraftRepository
//!
//! 未送信の下書きを ID で保持する。下書き自体は不変で、
//! 送信成功時に削除される。

use std::sync::Mutex;

use async_trait::async_trait;
use outreach_domain::draft::{Draft, DraftId};

use crate::error::{InfraError, lock};

/// 下書きリポジトリトレイト
#[async_trait]
pub trait DraftRepository: Send + Sync {
   /// 下書きを挿入する
   ///
   /// 同じ ID が既に存在する場合は `InfraErrorKind::Conflict` を返す。
   async fn insert(&self, draft: &Draft) -> Result<(), InfraError>;

   /// ID で下書きを検索する
   async fn find_by_id(&self, id: &DraftId) -> Result<Option<Draft>, InfraError>;

   /// 下書きの一覧を作成順で取得する
   async fn find_all(&self) -> Result<Vec<Draft>, InfraError>;

   /// 下書きを削除する
   ///
   /// 削除した場合は `true`、存在しなかった場合は `false` を返す。
   async fn delete(&self, id: &DraftId) -> Result<bool, InfraError>;
}

/// インメモリ実装の DraftRepository
#[derive(Debug, Default)]
pub struct InMemoryDraftRepository {
   drafts: Mutex<Vec<Draft>>,
}

impl InMemoryDraftRepository {
   pub fn new() -> Self {
      Self::default()
   }
}

#[async_trait]
impl DraftRepository for InMemoryDraftRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(draft_id = %draft.id()))]
   async fn insert(&self, draft: &Draft) -> Result<(), InfraError> {
      let mut drafts = lock(&self.drafts, "DraftRepository")?;
      if drafts.iter().any(|d| d.id() == draft.id()) {
         return Err(InfraError::conflict("Draft", draft.id().to_string()));
      }
      drafts.push(draft.clone());
      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(draft_id = %id))]
   async fn find_by_id(&self, id: &DraftId) -> Result<Option<Draft>, InfraError> {
      let drafts = lock(&self.drafts, "DraftRepository")?;
      Ok(drafts.iter().find(|d| d.id() == id).cloned())
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self) -> Result<Vec<Draft>, InfraError> {
      Ok(lock(&self.drafts, "DraftRepository")?.clone())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(draft_id = %id))]
   async fn delete(&self, id: &DraftId) -> Result<bool, InfraError> {
      let mut drafts = lock(&self.drafts, "DraftRepository")?;
      let before = drafts.len();
      drafts.retain(|d| d.id() != id);
      Ok(drafts.len() != before)
   }
}
