//! # コンポジション
//!
//! 本文テンプレートと宛先（To / CC）の組。即時送信と下書き送信の両方で
//! 同じレンダリング手順（resolve-and-render）を通る。
//!
//! ## resolve-and-render
//!
//! 1. To と CC の和集合を宛先とする（重複は 1 回のみ、To → CC の出現順）
//! 2. すべての宛先を連絡先に解決する。1 件でも見つからなければ失敗
//! 3. テンプレートを解析し、宛先ごとに展開する
//!
//! 失敗時は 1 件もメッセージを返さないため、呼び出し側は結果をまとめて
//! 送信記録に追記するだけで all-or-nothing になる。

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use itertools::Itertools;

use crate::{
   DomainError,
   contact::Contact,
   email::Email,
   message::RenderedMessage,
   template::Template,
};

/// 宛先（To / CC）
///
/// どちらも集合として扱い、生成時に重複を取り除く（最初の出現順を保持）。
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Recipients {
   to: Vec<Email>,
   cc: Vec<Email>,
}

impl Recipients {
   pub fn new(to: Vec<Email>, cc: Vec<Email>) -> Self {
      Self {
         to: to.into_iter().unique().collect(),
         cc: cc.into_iter().unique().collect(),
      }
   }

   pub fn to(&self) -> &[Email] {
      &self.to
   }

   pub fn cc(&self) -> &[Email] {
      &self.cc
   }

   /// To と CC の和集合
   pub fn all(&self) -> Vec<&Email> {
      self.to.iter().chain(self.cc.iter()).unique().collect()
   }
}

/// 本文テンプレートと宛先の組
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Composition {
   template:   String,
   recipients: Recipients,
}

impl Composition {
   pub fn new(template: impl Into<String>, recipients: Recipients) -> Self {
      Self {
         template: template.into(),
         recipients,
      }
   }

   pub fn template(&self) -> &str {
      &self.template
   }

   pub fn recipients(&self) -> &Recipients {
      &self.recipients
   }

   /// 宛先全員分のメッセージを生成する
   ///
   /// `directory` には少なくとも宛先に対応する連絡先が含まれている必要がある
   /// （余分な連絡先は無視する）。各メッセージの CC には CC 集合全体を設定する。
   ///
   /// # エラー
   ///
   /// - 連絡先が見つからない宛先がある: 最初の 1 件を `DomainError::NotFound` で返す
   /// - テンプレートが不正: `DomainError::Template`
   pub fn render_all(
      &self,
      directory: &[Contact],
      sent_at: DateTime<Utc>,
   ) -> Result<Vec<RenderedMessage>, DomainError> {
      let by_email: HashMap<&Email, &Contact> =
         directory.iter().map(|c| (c.email(), c)).collect();

      let resolved = self
         .recipients
         .all()
         .into_iter()
         .map(|email| {
            by_email
               .get(email)
               .map(|contact| (email, *contact))
               .ok_or_else(|| DomainError::NotFound {
                  entity_type: "Contact",
                  id:          email.to_string(),
               })
         })
         .collect::<Result<Vec<_>, _>>()?;

      let template = Template::parse(&self.template)?;

      Ok(resolved
         .into_iter()
         .map(|(email, contact)| {
            RenderedMessage::new(
               email.clone(),
               self.recipients.cc().to_vec(),
               template.render(contact),
               sent_at,
            )
         })
         .collect())
   }
}
