//! # 連絡先
//!
//! ディレクトリに登録された非営利団体。メールアドレスをキーとし、
//! 登録後は変更されない。

use crate::{DomainError, email::Email};

/// 連絡先（ディレクトリのエントリ）
///
/// テンプレートの `{name}` / `{address}` の置換元になる。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
   name:    String,
   address: String,
   email:   Email,
}

impl Contact {
   /// 連絡先を作成する
   ///
   /// # エラー
   ///
   /// 名前が空（空白のみを含む）の場合は `DomainError::Validation` を返す。
   pub fn new(
      name: impl Into<String>,
      address: impl Into<String>,
      email: Email,
   ) -> Result<Self, DomainError> {
      let name = name.into().trim().to_string();
      if name.is_empty() {
         return Err(DomainError::Validation(format!(
            "団体名は必須です: {email}"
         )));
      }

      Ok(Self {
         name,
         address: address.into(),
         email,
      })
   }

   pub fn name(&self) -> &str {
      &self.name
   }

   pub fn address(&self) -> &str {
      &self.address
   }

   pub fn email(&self) -> &Email {
      &self.email
   }

   /// メールアドレスのドメイン部が `domain` と一致するか（大文字小文字を区別しない）
   pub fn belongs_to_domain(&self, domain: &str) -> bool {
      self.email.domain().eq_ignore_ascii_case(domain.trim())
   }
}

#[cfg(test)]
mod tests {
   use pretty_assertions::assert_eq;

   use super::*;

   fn email(value: &str) -> Email {
      Email::new(value).unwrap()
   }

   #[test]
   fn test_名前の前後の空白を取り除いて作成する() {
      let contact = Contact::new("  Green Earth ", "456 Forest Ave", email("info@greenearth.org"))
         .unwrap();

      assert_eq!(contact.name(), "Green Earth");
      assert_eq!(contact.address(), "456 Forest Ave");
      assert_eq!(contact.email().as_str(), "info@greenearth.org");
   }

   #[test]
   fn test_空の名前を拒否する() {
      let result = Contact::new("   ", "456 Forest Ave", email("info@greenearth.org"));
      assert!(matches!(result, Err(DomainError::Validation(_))));
   }

   #[test]
   fn test_住所は空でも受け入れる() {
      assert!(Contact::new("Green Earth", "", email("info@greenearth.org")).is_ok());
   }

   #[test]
   fn test_ドメイン一致は完全一致で判定する() {
      let contact = Contact::new("Alice", "1 Main St", email("alice@x.org")).unwrap();

      assert!(contact.belongs_to_domain("x.org"));
      assert!(contact.belongs_to_domain("X.ORG"));
      assert!(!contact.belongs_to_domain("ax.org"));
      assert!(!contact.belongs_to_domain("org"));
   }
}
