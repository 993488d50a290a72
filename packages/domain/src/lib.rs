//! # Outreach ドメイン層
//!
//! 非営利団体の連絡先ディレクトリと、テンプレートメールの送信記録に関する
//! ドメインモデルを定義する。
//!
//! ## 依存関係の方向
//!
//! ```text
//! api → infra → domain
//! ```
//!
//! ドメイン層はインフラ層（ストア実装）には一切依存しない。
//!
//! ## モジュール構成
//!
//! - [`clock`] - 時刻プロバイダ
//! - [`composition`] - テンプレートと宛先の組、送信時のレンダリング
//! - [`contact`] - 連絡先（ディレクトリのエントリ）
//! - [`draft`] - 下書き
//! - [`email`] - メールアドレス値オブジェクト
//! - [`error`] - ドメインエラー
//! - [`message`] - 送信済みメッセージと検索条件
//! - [`template`] - `{name}` / `{address}` 置換テンプレート
//!
//! ## 使用例
//!
//! ```rust
//! use outreach_domain::{contact::Contact, email::Email, template};
//!
//! let contact = Contact::new(
//!     "Helping Hands",
//!     "123 Charity Lane, Springfield, IL",
//!     Email::new("contact@helpinghands.org")?,
//! )?;
//! let body = template::render("Dear {name}", &contact)?;
//! assert_eq!(body, "Dear Helping Hands");
//! # Ok::<(), outreach_domain::DomainError>(())
//! ```

#[macro_use]
mod macros;

pub mod clock;
pub mod composition;
pub mod contact;
pub mod draft;
pub mod email;
pub mod error;
pub mod message;
pub mod template;

pub use error::DomainError;
