//! 統合テスト共通ヘルパー

#![allow(dead_code)]

use std::sync::Arc;

use axum::{
   Router,
   body::Body,
   http::{Method, Request, Response, StatusCode},
};
use chrono::{DateTime, Utc};
use outreach_api::app::{AppDependencies, build_router};
use outreach_domain::clock::FixedClock;
use serde_json::{Value as JsonValue, json};
use tower::ServiceExt;

pub fn fixed_now() -> DateTime<Utc> {
   DateTime::from_timestamp(1_700_000_000, 0).unwrap()
}

/// テスト用アプリケーション
pub struct TestApp {
   pub router: Router,
   pub deps:   AppDependencies,
   pub clock:  Arc<FixedClock>,
}

impl TestApp {
   /// 空のストアと固定時刻でアプリケーションを構築する
   pub fn new() -> Self {
      let clock = Arc::new(FixedClock::new(fixed_now()));
      let deps = AppDependencies::in_memory(clock.clone());
      Self::with_deps(deps, clock)
   }

   pub fn with_deps(deps: AppDependencies, clock: Arc<FixedClock>) -> Self {
      Self {
         router: build_router(&deps),
         deps,
         clock,
      }
   }

   pub async fn request(&self, method: Method, uri: &str, body: Option<JsonValue>) -> Response<Body> {
      let builder = Request::builder().method(method).uri(uri);
      let request = match body {
         Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
         None => builder.body(Body::empty()).unwrap(),
      };

      self.router.clone().oneshot(request).await.unwrap()
   }

   pub async fn get(&self, uri: &str) -> (StatusCode, JsonValue) {
      let response = self.request(Method::GET, uri, None).await;
      (response.status(), parse_body(response).await)
   }

   pub async fn post(&self, uri: &str, body: JsonValue) -> (StatusCode, JsonValue) {
      let response = self.request(Method::POST, uri, Some(body)).await;
      (response.status(), parse_body(response).await)
   }

   /// 連絡先を登録する（成功を前提とする）
   pub async fn create_contact(&self, name: &str, address: &str, email: &str) {
      let (status, _) = self
         .post(
            "/nonprofits",
            json!({"name": name, "address": address, "email": email}),
         )
         .await;
      assert_eq!(status, StatusCode::CREATED, "連絡先の登録に失敗: {email}");
   }

   /// 送信記録を取得する
   pub async fn sent_emails(&self, query: &str) -> Vec<JsonValue> {
      let (status, body) = self.get(&format!("/sent-emails{query}")).await;
      assert_eq!(status, StatusCode::OK);
      body["data"].as_array().unwrap().clone()
   }
}

/// レスポンスボディを JSON として解析する
///
/// 空のボディは `null` として扱う。
pub async fn parse_body(response: Response<Body>) -> JsonValue {
   let body = axum::body::to_bytes(response.into_body(), usize::MAX)
      .await
      .unwrap();
   if body.is_empty() {
      return JsonValue::Null;
   }
   serde_json::from_slice(&body).unwrap()
}
