//! # ドメイン層エラー定義
//!
//! ## エラーの種類と HTTP ステータスの対応
//!
//! | エラー種別 | HTTP ステータス | 用途 |
//! |-----------|----------------|------|
//! | `Validation` | 400 Bad Request | 入力値の検証失敗 |
//! | `NotFound` | 404 Not Found | 連絡先・下書きが存在しない |
//! | `AlreadyExists` | 400 Bad Request | 連絡先の重複登録 |
//! | `Template` | 400 Bad Request | 未対応のプレースホルダー |

use thiserror::Error;

use crate::template::TemplateError;

/// ドメイン層で発生するエラー
///
/// API 層でこのエラーを受け取り、適切な HTTP レスポンスに変換する。
/// どのバリアントも、呼び出し元が原因のキー（メールアドレスや下書き ID）を
/// 特定できる情報を含む。
#[derive(Debug, Error)]
pub enum DomainError {
   /// バリデーションエラー
   #[error("バリデーションエラー: {0}")]
   Validation(String),

   /// エンティティが見つからない
   #[error("{entity_type} が見つかりません: {id}")]
   NotFound {
      /// エンティティの種類（"Contact", "Draft"）
      entity_type: &'static str,
      /// 検索に使用した識別子
      id:          String,
   },

   /// エンティティが既に存在する
   #[error("{entity_type} は既に存在します: {id}")]
   AlreadyExists {
      entity_type: &'static str,
      id:          String,
   },

   /// テンプレートエラー
   #[error(transparent)]
   Template(#[from] TemplateError),
}
