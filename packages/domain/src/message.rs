//! # 送信済みメッセージ
//!
//! 送信記録（Send Ledger）に追記される、レンダリング済みのメッセージ。
//! 実際のメール配送は行わず、この記録の追加をもって「送信」とする。

use chrono::{DateTime, Utc};

use crate::email::Email;

/// レンダリング済みメッセージ
///
/// 送信操作で解決された宛先 1 件につき 1 つ生成され、以後変更されない。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedMessage {
   to:      Email,
   cc:      Vec<Email>,
   body:    String,
   sent_at: DateTime<Utc>,
}

impl RenderedMessage {
   pub fn new(to: Email, cc: Vec<Email>, body: String, sent_at: DateTime<Utc>) -> Self {
      Self {
         to,
         cc,
         body,
         sent_at,
      }
   }

   pub fn to(&self) -> &Email {
      &self.to
   }

   pub fn cc(&self) -> &[Email] {
      &self.cc
   }

   pub fn body(&self) -> &str {
      &self.body
   }

   pub fn sent_at(&self) -> DateTime<Utc> {
      self.sent_at
   }
}

/// 送信記録の検索条件
///
/// 指定された条件はすべて AND で適用する。何も指定しなければ全件に一致する。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SentMessageFilter {
   /// 送信先が一致するもの
   pub to: Option<Email>,
   /// CC にこのアドレスを含むもの
   pub cc: Option<Email>,
}

impl SentMessageFilter {
   pub fn matches(&self, message: &RenderedMessage) -> bool {
      let to_matches = self.to.as_ref().is_none_or(|to| message.to() == to);
      let cc_matches = self.cc.as_ref().is_none_or(|cc| message.cc().contains(cc));
      to_matches && cc_matches
   }
}
