//! # 送信ユースケース
//!
//! 即時送信と下書き送信は同じ手順で処理する:
//!
//! 1. 宛先全員を連絡先に解決する
//! 2. テンプレートを宛先ごとに展開する
//! 3. 生成したメッセージを送信記録にまとめて追記する
//!
//! 1 と 2 のどちらかで失敗した場合は何も追記しない。

use std::sync::Arc;

use outreach_domain::{
   clock::Clock,
   composition::Composition,
   draft::DraftId,
   message::{RenderedMessage, SentMessageFilter},
};
use outreach_infra::repository::{ContactRepository, DraftRepository, SentMessageRepository};

use super::{SendLock, draft_not_found};
use crate::error::ApiError;

/// 送信ユースケース
pub struct EmailUseCaseImpl {
   contact_repository:      Arc<dyn ContactRepository>,
   sent_message_repository: Arc<dyn SentMessageRepository>,
   draft_repository:        Arc<dyn DraftRepository>,
   clock:                   Arc<dyn Clock>,
   send_lock:               SendLock,
}

impl EmailUseCaseImpl {
   pub fn new(
      contact_repository: Arc<dyn ContactRepository>,
      sent_message_repository: Arc<dyn SentMessageRepository>,
      draft_repository: Arc<dyn DraftRepository>,
      clock: Arc<dyn Clock>,
      send_lock: SendLock,
   ) -> Self {
      Self {
         contact_repository,
         sent_message_repository,
         draft_repository,
         clock,
         send_lock,
      }
   }

   /// コンポジションを即時送信する
   ///
   /// 送信したメッセージ数（To と CC の和集合の件数）を返す。
   pub async fn send_now(&self, composition: &Composition) -> Result<usize, ApiError> {
      let _guard = self.send_lock.lock().await;
      let sent = self.deliver(composition).await?;

      tracing::info!(sent, "メールを送信しました");
      Ok(sent)
   }

   /// 下書きを送信する
   ///
   /// 成功した場合のみ下書きを削除する。失敗時は下書きも送信記録も変わらない。
   pub async fn send_draft(&self, id: &DraftId) -> Result<usize, ApiError> {
      let _guard = self.send_lock.lock().await;

      let draft = self
         .draft_repository
         .find_by_id(id)
         .await?
         .ok_or_else(|| draft_not_found(id))?;

      let sent = self.deliver(draft.composition()).await?;
      self.draft_repository.delete(id).await?;

      tracing::info!(draft_id = %id, sent, "下書きを送信しました");
      Ok(sent)
   }

   /// 送信記録を条件で絞り込んで取得する
   pub async fn list_sent_messages(
      &self,
      filter: &SentMessageFilter,
   ) -> Result<Vec<RenderedMessage>, ApiError> {
      Ok(self.sent_message_repository.find_all(filter).await?)
   }

   /// 解決・展開・追記を行う。呼び出し側で送信ロックを保持していること。
   async fn deliver(&self, composition: &Composition) -> Result<usize, ApiError> {
      let emails: Vec<_> = composition
         .recipients()
         .all()
         .into_iter()
         .cloned()
         .collect();
      let directory = self.contact_repository.find_by_emails(&emails).await?;

      let messages = composition
         .render_all(&directory, self.clock.now())
         .inspect_err(|e| tracing::warn!(error = %e, "送信を中止しました"))?;

      self.sent_message_repository.append_all(&messages).await?;
      Ok(messages.len())
   }
}
