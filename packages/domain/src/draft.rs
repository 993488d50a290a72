//! # 下書き
//!
//! 送信前のコンポジションを保存したもの。送信に成功した時点で削除され、
//! 送信に失敗した場合は変更されずに残る。
//!
//! ## 状態遷移
//!
//! ```text
//! draft ──send 成功──→ （削除）
//!   └───send 失敗──→ draft（変更なし）
//! ```
//!
//! `status` は常に `"draft"` で、他の値に遷移しない。送信済みの下書きは
//! ストアに残らないため、API 互換のためのフィールドとして保持している。

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::IntoStaticStr;

use crate::composition::{Composition, Recipients};

define_uuid_id! {
   /// 下書き ID
   ///
   /// UUID v7 を使用。外部には不透明な文字列として公開する。
   pub struct DraftId;
}

/// 下書きのステータス
#[derive(
   Debug,
   Clone,
   Copy,
   Default,
   PartialEq,
   Eq,
   Serialize,
   Deserialize,
   IntoStaticStr,
   strum::Display,
   strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum DraftStatus {
   /// 未送信
   #[default]
   Draft,
}

/// 下書き
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draft {
   id:          DraftId,
   composition: Composition,
   created_at:  DateTime<Utc>,
   status:      DraftStatus,
}

impl Draft {
   /// 新しい下書きを作成する
   pub fn new(id: DraftId, composition: Composition, now: DateTime<Utc>) -> Self {
      Self {
         id,
         composition,
         created_at: now,
         status: DraftStatus::Draft,
      }
   }

   pub fn id(&self) -> &DraftId {
      &self.id
   }

   pub fn composition(&self) -> &Composition {
      &self.composition
   }

   pub fn template(&self) -> &str {
      self.composition.template()
   }

   pub fn recipients(&self) -> &Recipients {
      self.composition.recipients()
   }

   pub fn created_at(&self) -> DateTime<Utc> {
      self.created_at
   }

   pub fn status(&self) -> DraftStatus {
      self.status
   }
}
