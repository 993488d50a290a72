//! # アプリケーションの組み立て
//!
//! ストアと時刻プロバイダを [`AppDependencies`] にまとめ、
//! ハンドラごとの State を生成してルーターを構築する。
//!
//! ストアはここで明示的に生成され、State を通してのみ共有される。
//! グローバルな状態は持たない。

use std::sync::Arc;

use axum::{
   Router,
   routing::{get, post},
};
use outreach_domain::clock::{Clock, SystemClock};
use outreach_infra::repository::{
   ContactRepository,
   DraftRepository,
   InMemoryContactRepository,
   InMemoryDraftRepository,
   InMemorySentMessageRepository,
   SentMessageRepository,
};
use tower_http::trace::TraceLayer;

use crate::{
   handler::{
      ContactState,
      DraftState,
      EmailState,
      create_contact,
      delete_draft,
      get_contact,
      get_draft,
      health_check,
      list_contacts,
      list_drafts,
      list_sent_emails,
      save_draft,
      send_draft,
      send_email,
   },
   usecase::{ContactUseCaseImpl, DraftUseCaseImpl, EmailUseCaseImpl, SendLock},
};

/// アプリケーションが依存するコンポーネント
#[derive(Clone)]
pub struct AppDependencies {
   pub contact_repository:      Arc<dyn ContactRepository>,
   pub sent_message_repository: Arc<dyn SentMessageRepository>,
   pub draft_repository:        Arc<dyn DraftRepository>,
   pub clock:                   Arc<dyn Clock>,
}

impl AppDependencies {
   /// 空のインメモリストアで依存コンポーネントを作成する
   pub fn in_memory(clock: Arc<dyn Clock>) -> Self {
      Self {
         contact_repository: Arc::new(InMemoryContactRepository::new()),
         sent_message_repository: Arc::new(InMemorySentMessageRepository::new()),
         draft_repository: Arc::new(InMemoryDraftRepository::new()),
         clock,
      }
   }
}

impl Default for AppDependencies {
   fn default() -> Self {
      Self::in_memory(Arc::new(SystemClock))
   }
}

/// ルーターを構築する
pub fn build_router(deps: &AppDependencies) -> Router {
   // 即時送信・下書き送信・下書き破棄で共有する
   let send_lock = SendLock::default();

   let contact_state = Arc::new(ContactState {
      usecase: ContactUseCaseImpl::new(deps.contact_repository.clone()),
   });

   let email_state = Arc::new(EmailState {
      usecase: EmailUseCaseImpl::new(
         deps.contact_repository.clone(),
         deps.sent_message_repository.clone(),
         deps.draft_repository.clone(),
         deps.clock.clone(),
         send_lock.clone(),
      ),
   });

   let draft_state = Arc::new(DraftState {
      usecase: DraftUseCaseImpl::new(
         deps.draft_repository.clone(),
         deps.clock.clone(),
         send_lock,
      ),
   });

   Router::new()
      .route("/health", get(health_check))
      // 連絡先 API
      .route("/nonprofits", get(list_contacts).post(create_contact))
      .route("/nonprofits/{email}", get(get_contact))
      .with_state(contact_state)
      // 送信 API
      .route("/send-email", post(send_email))
      .route("/sent-emails", get(list_sent_emails))
      .route("/drafts/{id}/send", post(send_draft))
      .with_state(email_state)
      // 下書き API
      .route("/drafts", get(list_drafts).post(save_draft))
      .route("/drafts/{id}", get(get_draft).delete(delete_draft))
      .with_state(draft_state)
      .layer(TraceLayer::new_for_http())
}
