//! 下書きのユースケース

use std::sync::Arc;

use outreach_domain::{
   clock::Clock,
   composition::Composition,
   draft::{Draft, DraftId},
};
use outreach_infra::repository::DraftRepository;

use super::{SendLock, draft_not_found, parse_draft_id};
use crate::error::ApiError;

/// 下書きユースケース
pub struct DraftUseCaseImpl {
   draft_repository: Arc<dyn DraftRepository>,
   clock:            Arc<dyn Clock>,
   send_lock:        SendLock,
}

impl DraftUseCaseImpl {
   pub fn new(
      draft_repository: Arc<dyn DraftRepository>,
      clock: Arc<dyn Clock>,
      send_lock: SendLock,
   ) -> Self {
      Self {
         draft_repository,
         clock,
         send_lock,
      }
   }

   /// 下書きを保存する
   ///
   /// 宛先の存在やテンプレートの妥当性は送信時まで検証しない。
   pub async fn save_draft(&self, composition: Composition) -> Result<Draft, ApiError> {
      let draft = Draft::new(DraftId::new(), composition, self.clock.now());
      self.draft_repository.insert(&draft).await?;

      tracing::info!(draft_id = %draft.id(), "下書きを保存しました");
      Ok(draft)
   }

   /// ID で下書きを取得する
   pub async fn get_draft(&self, id: &str) -> Result<Draft, ApiError> {
      let draft_id = parse_draft_id(id)?;
      self
         .draft_repository
         .find_by_id(&draft_id)
         .await?
         .ok_or_else(|| draft_not_found(id))
   }

   /// 下書きの一覧を作成順で取得する
   pub async fn list_drafts(&self) -> Result<Vec<Draft>, ApiError> {
      Ok(self.draft_repository.find_all().await?)
   }

   /// 下書きを送信せずに破棄する
   pub async fn delete_draft(&self, id: &str) -> Result<(), ApiError> {
      let draft_id = parse_draft_id(id)?;

      let _guard = self.send_lock.lock().await;
      if !self.draft_repository.delete(&draft_id).await? {
         return Err(draft_not_found(id));
      }

      tracing::info!(draft_id = %draft_id, "下書きを破棄しました");
      Ok(())
   }
}
