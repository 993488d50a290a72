//! # SentMessageRepository
//!
//! 送信記録（Send Ledger）。追記のみで、変更・削除はできない。
//! 挿入順がそのまま送信順になる。

use std::sync::Mutex;

use async_trait::async_trait;
use outreach_domain::message::{RenderedMessage, SentMessageFilter};

use crate::error::{InfraError, lock};

/// 送信記録リポジトリトレイト
#[async_trait]
pub trait SentMessageRepository: Send + Sync {
   /// メッセージを末尾に追記する
   async fn append(&self, message: &RenderedMessage) -> Result<(), InfraError>;

   /// 複数のメッセージを 1 回のロック取得でまとめて追記する
   ///
   /// 並行する別の一括追記と交互に並ぶことはない。
   async fn append_all(&self, messages: &[RenderedMessage]) -> Result<(), InfraError>;

   /// 条件に一致するメッセージを送信順で取得する
   async fn find_all(&self, filter: &SentMessageFilter) -> Result<Vec<RenderedMessage>, InfraError>;

   /// 記録されているメッセージの件数
   async fn count(&self) -> Result<usize, InfraError>;
}

/// インメモリ実装の SentMessageRepository
#[derive(Debug, Default)]
pub struct InMemorySentMessageRepository {
   messages: Mutex<Vec<RenderedMessage>>,
}

impl InMemorySentMessageRepository {
   pub fn new() -> Self {
      Self::default()
   }
}

#[async_trait]
impl SentMessageRepository for InMemorySentMessageRepository {
   #[tracing::instrument(skip_all, level = "debug", fields(to = %message.to()))]
   async fn append(&self, message: &RenderedMessage) -> Result<(), InfraError> {
      lock(&self.messages, "SentMessageRepository")?.push(message.clone());
      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug", fields(count = messages.len()))]
   async fn append_all(&self, messages: &[RenderedMessage]) -> Result<(), InfraError> {
      lock(&self.messages, "SentMessageRepository")?.extend_from_slice(messages);
      Ok(())
   }

   #[tracing::instrument(skip_all, level = "debug")]
   async fn find_all(&self, filter: &SentMessageFilter) -> Result<Vec<RenderedMessage>, InfraError> {
      let messages = lock(&self.messages, "SentMessageRepository")?;
      Ok(messages
         .iter()
         .filter(|m| filter.matches(m))
         .cloned()
         .collect())
   }

   async fn count(&self) -> Result<usize, InfraError> {
      Ok(lock(&self.messages, "SentMessageRepository")?.len())
   }
}
