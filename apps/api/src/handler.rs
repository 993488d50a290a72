//! # HTTP リクエストハンドラ
//!
//! axum のルートに対応するハンドラ関数を定義する。
//!
//! ## 設計方針
//!
//! - 各ハンドラはサブモジュールに配置し、この `handler.rs` で re-export する
//! - リクエストに含まれるメールアドレスは、ストアに触れる前にここで検証する
//! - ハンドラは薄く保ち、ロジックはユースケースに委譲する

pub mod composition;
pub mod contact;
pub mod draft;
pub mod email;
pub mod health;

pub use contact::{ContactState, create_contact, get_contact, list_contacts};
pub use draft::{DraftState, delete_draft, get_draft, list_drafts, save_draft};
pub use email::{EmailState, list_sent_emails, send_draft, send_email};
pub use health::health_check;
