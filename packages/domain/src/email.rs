//! # メールアドレス
//!
//! 連絡先のキー、送信先、CC、検索条件のすべてで使われる値オブジェクト。
//! 境界（ハンドラ）で生成し、不正な値がストアに到達しないようにする。

use derive_more::Display;
use serde::{Deserialize, Serialize};

use crate::DomainError;

/// メールアドレスの最大長
const MAX_LENGTH: usize = 255;

/// メールアドレス（値オブジェクト）
///
/// # 不変条件
///
/// - 前後の空白を除いて 1〜255 文字、内部に空白を含まない
/// - `@` をちょうど 1 つ含み、ローカル部とドメイン部が空でない
/// - ドメイン部は `.` で区切られた 2 つ以上の空でないラベルからなる
/// - ドメイン部は小文字に正規化される（ローカル部はそのまま）
///
/// # 使用例
///
/// ```rust
/// use outreach_domain::email::Email;
///
/// let email = Email::new("Info@GreenEarth.org")?;
/// assert_eq!(email.as_str(), "Info@greenearth.org");
/// assert_eq!(email.domain(), "greenearth.org");
/// # Ok::<(), outreach_domain::DomainError>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Display)]
#[serde(try_from = "String", into = "String")]
#[display("{_0}")]
pub struct Email(String);

impl Email {
   /// メールアドレスを作成する
   ///
   /// # エラー
   ///
   /// 形式が不正な場合は `DomainError::Validation` を返す。
   pub fn new(value: impl Into<String>) -> Result<Self, DomainError> {
      let value = value.into();
      let value = value.trim();

      if value.is_empty() {
         return Err(DomainError::Validation(
            "メールアドレスは必須です".to_string(),
         ));
      }

      if value.chars().count() > MAX_LENGTH {
         return Err(DomainError::Validation(format!(
            "メールアドレスは{MAX_LENGTH}文字以内である必要があります: {value}"
         )));
      }

      let invalid = || DomainError::Validation(format!("メールアドレスの形式が不正です: {value}"));

      if value.chars().any(char::is_whitespace) {
         return Err(invalid());
      }

      let Some((local, domain)) = value.split_once('@') else {
         return Err(invalid());
      };

      if local.is_empty() || domain.contains('@') {
         return Err(invalid());
      }

      let labels: Vec<&str> = domain.split('.').collect();
      if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
         return Err(invalid());
      }

      Ok(Self(format!("{local}@{}", domain.to_ascii_lowercase())))
   }

   /// 文字列参照を取得する
   pub fn as_str(&self) -> &str {
      &self.0
   }

   /// ドメイン部（`@` 以降）を取得する
   pub fn domain(&self) -> &str {
      // 生成時に `@` を含むことを検証済み
      self.0.split_once('@').map_or("", |(_, domain)| domain)
   }

   /// 所有権を持つ文字列に変換する
   pub fn into_string(self) -> String {
      self.0
   }
}

impl TryFrom<String> for Email {
   type Error = DomainError;

   fn try_from(value: String) -> Result<Self, Self::Error> {
      Self::new(value)
   }
}

impl From<Email> for String {
   fn from(email: Email) -> Self {
      email.0
   }
}
