//! 送信・下書き API 統合テスト
//!
//! 複数の操作を横断して、送信記録と下書きストアの整合性を検証する。
//!
//! ## テストケース
//!
//! - To + CC の送信で宛先ごとにメッセージが記録され、全件に CC が付く
//! - 未登録の宛先・不正なテンプレートでは何も記録されない
//! - 下書きの保存 → 取得 → 送信 → 取得（404）
//! - 送信に失敗した下書きは残る
//! - 送信時刻は下書きの作成時刻ではなく送信した時点になる
//! - ストアの障害は 500 で詳細を返さない

mod helpers;

use std::sync::Arc;

use async_trait::async_trait;
use axum::http::{Method, StatusCode};
use chrono::Duration;
use helpers::{TestApp, fixed_now, parse_body};
use outreach_api::app::AppDependencies;
use outreach_domain::{
   clock::FixedClock,
   message::{RenderedMessage, SentMessageFilter},
};
use outreach_infra::{InfraError, repository::SentMessageRepository};
use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::{Value as JsonValue, json};

async fn app_with_alice_and_bob() -> TestApp {
   let app = TestApp::new();
   app.create_contact("Alice", "1 Main St", "alice@x.org").await;
   app.create_contact("Bob", "2 Oak St", "bob@x.org").await;
   app
}

fn compose(template: &str, emails: &[&str], cc: &[&str]) -> JsonValue {
   json!({"template": template, "emails": emails, "cc": cc})
}

#[tokio::test]
async fn test_toとccの宛先それぞれにccつきで記録される() {
   let app = app_with_alice_and_bob().await;

   let (status, body) = app
      .post(
         "/send-email",
         compose("Hi {name}, at {address}", &["alice@x.org"], &["bob@x.org"]),
      )
      .await;

   assert_eq!(status, StatusCode::OK);
   assert_eq!(
      body,
      json!({"data": {"message": "Emails sent successfully.", "sent": 2}})
   );

   let timestamp = fixed_now().to_rfc3339();
   assert_eq!(
      app.sent_emails("").await,
      vec![
         json!({
            "to": "alice@x.org",
            "cc": ["bob@x.org"],
            "body": "Hi Alice, at 1 Main St",
            "timestamp": timestamp,
         }),
         json!({
            "to": "bob@x.org",
            "cc": ["bob@x.org"],
            "body": "Hi Bob, at 2 Oak St",
            "timestamp": timestamp,
         }),
      ]
   );
   assert_eq!(app.sent_emails("?cc=bob@x.org").await.len(), 2);
   assert_eq!(app.sent_emails("?to=alice@x.org").await.len(), 1);
   assert_eq!(app.sent_emails("?to=alice@x.org&cc=bob@x.org").await.len(), 1);
   assert!(app.sent_emails("?to=carol@x.org").await.is_empty());
}

#[tokio::test]
async fn test_ccを省略できる() {
   let app = app_with_alice_and_bob().await;

   let (status, _) = app
      .post(
         "/send-email",
         json!({"template": "Dear {name}", "emails": ["alice@x.org"]}),
      )
      .await;

   assert_eq!(status, StatusCode::OK);
   let sent = app.sent_emails("").await;
   assert_eq!(sent.len(), 1);
   assert_eq!(sent[0]["cc"], json!([]));
   assert_eq!(sent[0]["body"], "Dear Alice");
}

#[tokio::test]
async fn test_未登録の宛先を含むと404で何も記録しない() {
   let app = app_with_alice_and_bob().await;

   let (status, body) = app
      .post(
         "/send-email",
         compose("Hi {name}", &["alice@x.org", "missing@x.org"], &[]),
      )
      .await;

   assert_eq!(status, StatusCode::NOT_FOUND);
   assert!(body["detail"].as_str().unwrap().contains("missing@x.org"));
   assert!(app.sent_emails("").await.is_empty());
}

#[rstest]
#[case::未対応のプレースホルダー("Hi {nickname}")]
#[case::空のプレースホルダー("Hi {}")]
#[case::閉じていない括弧("Hi {name")]
#[case::対応しない閉じ括弧("Hi name}")]
#[tokio::test]
async fn test_不正なテンプレートは400で何も記録しない(#[case] template: &str) {
   let app = app_with_alice_and_bob().await;

   let (status, body) = app
      .post("/send-email", compose(template, &["alice@x.org", "bob@x.org"], &[]))
      .await;

   assert_eq!(status, StatusCode::BAD_REQUEST);
   assert!(body["type"].as_str().unwrap().ends_with("/bad-request"));
   assert!(app.sent_emails("").await.is_empty());
}

#[tokio::test]
async fn test_エスケープした括弧はそのまま出力される() {
   let app = app_with_alice_and_bob().await;

   app.post("/send-email", compose("{{{name}}}", &["alice@x.org"], &[]))
      .await;

   assert_eq!(app.sent_emails("").await[0]["body"], "{Alice}");
}

#[tokio::test]
async fn test_不正な宛先アドレスは400になる() {
   let app = app_with_alice_and_bob().await;

   let (status, _) = app
      .post("/send-email", compose("Hi", &["alice@x.org"], &["bob at x.org"]))
      .await;
   assert_eq!(status, StatusCode::BAD_REQUEST);

   let (status, _) = app.get("/sent-emails?to=not-an-email").await;
   assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_下書きを保存して取得し送信すると削除される() {
   let app = app_with_alice_and_bob().await;

   let (status, body) = app
      .post(
         "/drafts",
         compose("Hi {name}", &["alice@x.org", "alice@x.org"], &["bob@x.org"]),
      )
      .await;
   assert_eq!(status, StatusCode::CREATED);
   let saved = body["data"].clone();
   let id = saved["id"].as_str().unwrap().to_string();
   assert_eq!(saved["template"], "Hi {name}");
   assert_eq!(saved["emails"], json!(["alice@x.org"]));
   assert_eq!(saved["cc"], json!(["bob@x.org"]));
   assert_eq!(saved["status"], "draft");
   assert_eq!(saved["created_at"], fixed_now().to_rfc3339());

   let (status, body) = app.get(&format!("/drafts/{id}")).await;
   assert_eq!(status, StatusCode::OK);
   assert_eq!(body["data"], saved);

   let (status, body) = app.post(&format!("/drafts/{id}/send"), json!({})).await;
   assert_eq!(status, StatusCode::OK);
   assert_eq!(body["data"]["sent"], 2);
   assert_eq!(app.sent_emails("").await.len(), 2);

   let (status, body) = app.get(&format!("/drafts/{id}")).await;
   assert_eq!(status, StatusCode::NOT_FOUND);
   assert!(body["detail"].as_str().unwrap().contains(&id));

   let (status, _) = app.post(&format!("/drafts/{id}/send"), json!({})).await;
   assert_eq!(status, StatusCode::NOT_FOUND);
   assert_eq!(app.sent_emails("").await.len(), 2);
}

#[tokio::test]
async fn test_送信時刻は下書きの作成時刻ではなく送信した時点になる() {
   let app = app_with_alice_and_bob().await;
   let (_, body) = app
      .post("/drafts", compose("Hi {name}", &["alice@x.org"], &[]))
      .await;
   let id = body["data"]["id"].as_str().unwrap().to_string();

   app.clock.advance(Duration::hours(3));
   app.post(&format!("/drafts/{id}/send"), json!({})).await;

   let sent = app.sent_emails("").await;
   assert_eq!(sent[0]["timestamp"], (fixed_now() + Duration::hours(3)).to_rfc3339());
}

#[tokio::test]
async fn test_送信に失敗した下書きは残り何も記録しない() {
   let app = app_with_alice_and_bob().await;
   let (_, body) = app
      .post("/drafts", compose("Hi {name}", &["alice@x.org", "nobody@x.org"], &[]))
      .await;
   let saved = body["data"].clone();
   let id = saved["id"].as_str().unwrap().to_string();

   let (status, body) = app.post(&format!("/drafts/{id}/send"), json!({})).await;

   assert_eq!(status, StatusCode::NOT_FOUND);
   assert!(body["detail"].as_str().unwrap().contains("nobody@x.org"));
   assert!(app.sent_emails("").await.is_empty());
   assert_eq!(app.get(&format!("/drafts/{id}")).await.1["data"], saved);
}

#[tokio::test]
async fn test_下書き一覧は作成順で繰り返し取得しても同じになる() {
   let app = app_with_alice_and_bob().await;
   app.post("/drafts", compose("first", &["alice@x.org"], &[])).await;
   app.clock.advance(Duration::seconds(1));
   app.post("/drafts", compose("second", &["bob@x.org"], &[])).await;

   let (status, first) = app.get("/drafts").await;
   let (_, second) = app.get("/drafts").await;

   assert_eq!(status, StatusCode::OK);
   let templates: Vec<&str> = first["data"]
      .as_array()
      .unwrap()
      .iter()
      .map(|d| d["template"].as_str().unwrap())
      .collect();
   assert_eq!(templates, vec!["first", "second"]);
   assert_eq!(first, second);
}

#[tokio::test]
async fn test_下書きを破棄すると取得できない() {
   let app = app_with_alice_and_bob().await;
   let (_, body) = app
      .post("/drafts", compose("Hi", &["alice@x.org"], &[]))
      .await;
   let id = body["data"]["id"].as_str().unwrap().to_string();

   let response = app
      .request(Method::DELETE, &format!("/drafts/{id}"), None)
      .await;
   assert_eq!(response.status(), StatusCode::NO_CONTENT);

   assert_eq!(app.get(&format!("/drafts/{id}")).await.0, StatusCode::NOT_FOUND);
   let response = app
      .request(Method::DELETE, &format!("/drafts/{id}"), None)
      .await;
   assert_eq!(response.status(), StatusCode::NOT_FOUND);
   assert!(parse_body(response).await["detail"].as_str().unwrap().contains(&id));
}

#[rstest]
#[case::形式が不正なid("/drafts/not-a-uuid")]
#[case::存在しないid("/drafts/0190a0b0-0000-7000-8000-000000000000")]
#[tokio::test]
async fn test_見つからない下書きは404になる(#[case] uri: &str) {
   let app = TestApp::new();

   assert_eq!(app.get(uri).await.0, StatusCode::NOT_FOUND);
   assert_eq!(
      app.post(&format!("{uri}/send"), json!({})).await.0,
      StatusCode::NOT_FOUND
   );
}

/// 追記が常に失敗する送信記録
struct BrokenSentMessageRepository;

#[async_trait]
impl SentMessageRepository for BrokenSentMessageRepository {
   async fn append(&self, _message: &RenderedMessage) -> Result<(), InfraError> {
      Err(InfraError::unexpected("送信記録が利用できません"))
   }

   async fn append_all(&self, _messages: &[RenderedMessage]) -> Result<(), InfraError> {
      Err(InfraError::unexpected("送信記録が利用できません"))
   }

   async fn find_all(&self, _filter: &SentMessageFilter) -> Result<Vec<RenderedMessage>, InfraError> {
      Ok(Vec::new())
   }

   async fn count(&self) -> Result<usize, InfraError> {
      Ok(0)
   }
}

#[tokio::test]
async fn test_送信記録の障害は500で詳細を返さず下書きも残る() {
   let clock = Arc::new(FixedClock::new(fixed_now()));
   let deps = AppDependencies {
      sent_message_repository: Arc::new(BrokenSentMessageRepository),
      ..AppDependencies::in_memory(clock.clone())
   };
   let app = TestApp::with_deps(deps, clock);
   app.create_contact("Alice", "1 Main St", "alice@x.org").await;
   let (_, body) = app
      .post("/drafts", compose("Hi {name}", &["alice@x.org"], &[]))
      .await;
   let id = body["data"]["id"].as_str().unwrap().to_string();

   let (status, body) = app.post(&format!("/drafts/{id}/send"), json!({})).await;

   assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
   assert_eq!(body["detail"], "内部エラーが発生しました");
   assert_eq!(app.get(&format!("/drafts/{id}")).await.0, StatusCode::OK);
}
