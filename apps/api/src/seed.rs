//! # サンプル連絡先
//!
//! 起動時に連絡先ディレクトリへ登録する固定のサンプルデータ。
//! `OUTREACH_SEED_SAMPLE_CONTACTS=false` で無効にできる。

use outreach_domain::{contact::Contact, email::Email};
use outreach_infra::repository::ContactRepository;

use crate::error::ApiError;

/// サンプル連絡先（名前, 住所, メールアドレス）
pub const SAMPLE_CONTACTS: [(&str, &str, &str); 5] = [
   (
      "Helping Hands",
      "123 Charity Lane, Springfield, IL",
      "contact@helpinghands.org",
   ),
   (
      "Green Earth",
      "456 Forest Ave, Portland, OR",
      "info@greenearth.org",
   ),
   (
      "Food For All",
      "789 Market St, San Francisco, CA",
      "hello@foodforall.org",
   ),
   (
      "Books & Beyond",
      "321 Library Rd, Boston, MA",
      "support@booksbeyond.org",
   ),
   (
      "Shelter Safe",
      "654 Home St, Austin, TX",
      "admin@sheltersafe.org",
   ),
];

/// サンプル連絡先を登録する
///
/// 登録した件数を返す。既に登録済みのアドレスは読み飛ばす。
pub async fn seed_sample_contacts(repository: &dyn ContactRepository) -> Result<usize, ApiError> {
   let mut inserted = 0;

   for (name, address, email) in SAMPLE_CONTACTS {
      let contact = Contact::new(name, address, Email::new(email)?)?;
      match repository.insert(&contact).await {
         Ok(()) => inserted += 1,
         Err(e) if e.as_conflict().is_some() => {
            tracing::debug!(email, "サンプル連絡先は登録済みです");
         }
         Err(e) => return Err(e.into()),
      }
   }

   tracing::info!(inserted, "サンプル連絡先を登録しました");
   Ok(inserted)
}

#[cfg(test)]
mod tests {
   use outreach_infra::repository::InMemoryContactRepository;
   use pretty_assertions::assert_eq;

   use super::*;

   #[tokio::test]
   async fn test_5件のサンプルが登録順に入る() {
      let repo = InMemoryContactRepository::new();

      let inserted = seed_sample_contacts(&repo).await.unwrap();

      assert_eq!(inserted, 5);
      let names: Vec<String> = repo
         .find_all(None)
         .await
         .unwrap()
         .iter()
         .map(|c| c.name().to_string())
         .collect();
      assert_eq!(
         names,
         vec![
            "Helping Hands",
            "Green Earth",
            "Food For All",
            "Books & Beyond",
            "Shelter Safe",
         ]
      );
   }

   #[tokio::test]
   async fn test_2回目の登録は何も追加しない() {
      let repo = InMemoryContactRepository::new();
      seed_sample_contacts(&repo).await.unwrap();

      let inserted = seed_sample_contacts(&repo).await.unwrap();

      assert_eq!(inserted, 0);
      assert_eq!(repo.find_all(None).await.unwrap().len(), 5);
   }
}
