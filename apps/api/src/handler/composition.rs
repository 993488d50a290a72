//! # コンポジションの入力 DTO
//!
//! `POST /send-email` と `POST /drafts` が同じリクエスト形式を受け付ける。

use outreach_domain::{
   composition::{Composition, Recipients},
   email::Email,
};
use serde::Deserialize;

use crate::error::ApiError;

/// テンプレートと宛先のリクエスト
#[derive(Debug, Deserialize)]
pub struct ComposeRequest {
   pub template: String,
   pub emails:   Vec<String>,
   #[serde(default)]
   pub cc:       Vec<String>,
}

impl ComposeRequest {
   /// 宛先を検証してコンポジションに変換する
   ///
   /// 不正なアドレスが 1 件でもあれば `Validation` エラーを返す。
   pub fn into_composition(self) -> Result<Composition, ApiError> {
      let to = parse_emails(&self.emails)?;
      let cc = parse_emails(&self.cc)?;
      Ok(Composition::new(self.template, Recipients::new(to, cc)))
   }
}

/// 文字列をメールアドレスとして検証する
pub(crate) fn parse_email(value: &str) -> Result<Email, ApiError> {
   Ok(Email::new(value)?)
}

fn parse_emails(values: &[String]) -> Result<Vec<Email>, ApiError> {
   values.iter().map(|v| parse_email(v)).collect()
}
