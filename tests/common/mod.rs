//! Common Test Utilities
//!
//! A full router over the in-memory store, plus fixtures for the usual
//! register, login, post sequence.

use std::sync::Arc;

use argon2::Params;
use axum::http::StatusCode;
use axum_test::{TestResponse, TestServer};
use serde_json::{json, Value};

use forum_api::config::{CorsSettings, TokenSettings};
use forum_api::infrastructure::memory::MemoryStore;
use forum_api::infrastructure::security::{Argon2PasswordHash, JwtTokenManager};
use forum_api::startup::{build_router, AppState, Repositories};

pub const PASSWORD: &str = "secret";

/// Test application over a fresh in-memory store
pub struct TestApp {
    pub server: TestServer,
}

impl TestApp {
    pub fn new() -> Self {
        let repositories = Repositories::memory(Arc::new(MemoryStore::default()));
        let hasher = Argon2PasswordHash::with_params(Params::new(1024, 1, 1, None).unwrap());
        let tokens = JwtTokenManager::new(&TokenSettings {
            access_token_key: "test-access-token-key-test-access-token-key".into(),
            refresh_token_key: "test-refresh-token-key-test-refresh-token-key".into(),
            access_token_age: 3000,
        });

        let state = AppState::new(&repositories, Arc::new(hasher), Arc::new(tokens));
        let router = build_router(
            state,
            &CorsSettings {
                allowed_origins: vec![],
            },
        );

        Self {
            server: TestServer::new(router).unwrap(),
        }
    }

    /// Register `username` and return the new user id
    pub async fn register(&self, username: &str) -> String {
        let response = self
            .server
            .post("/users")
            .json(&json!({
                "username": username,
                "password": PASSWORD,
                "fullname": "Dicoding Indonesia",
            }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        data(&response)["addedUser"]["id"]
            .as_str()
            .unwrap()
            .to_owned()
    }

    /// Log in and return `(access_token, refresh_token)`
    pub async fn login(&self, username: &str) -> (String, String) {
        let response = self
            .server
            .post("/authentications")
            .json(&json!({ "username": username, "password": PASSWORD }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        let data = data(&response);
        (
            data["accessToken"].as_str().unwrap().to_owned(),
            data["refreshToken"].as_str().unwrap().to_owned(),
        )
    }

    /// Register and log in, returning an access token
    pub async fn access_token(&self, username: &str) -> String {
        self.register(username).await;
        self.login(username).await.0
    }

    pub async fn add_thread(&self, token: &str) -> String {
        let response = self
            .server
            .post("/threads")
            .authorization_bearer(token)
            .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        data(&response)["addedThread"]["id"]
            .as_str()
            .unwrap()
            .to_owned()
    }

    pub async fn add_comment(&self, token: &str, thread_id: &str, content: &str) -> String {
        let response = self
            .server
            .post(&format!("/threads/{}/comments", thread_id))
            .authorization_bearer(token)
            .json(&json!({ "content": content }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        data(&response)["addedComment"]["id"]
            .as_str()
            .unwrap()
            .to_owned()
    }

    pub async fn add_reply(
        &self,
        token: &str,
        thread_id: &str,
        comment_id: &str,
        content: &str,
    ) -> String {
        let response = self
            .server
            .post(&format!(
                "/threads/{}/comments/{}/replies",
                thread_id, comment_id
            ))
            .authorization_bearer(token)
            .json(&json!({ "content": content }))
            .await;
        assert_eq!(response.status_code(), StatusCode::CREATED);

        data(&response)["addedReply"]["id"]
            .as_str()
            .unwrap()
            .to_owned()
    }
}

/// The `data` member of a success envelope
pub fn data(response: &TestResponse) -> Value {
    let body = response.json::<Value>();
    assert_eq!(body["status"], "success");
    body["data"].clone()
}

/// Assert a `{ status: "fail", message }` body
pub fn assert_fail(response: &TestResponse, status: StatusCode, message: &str) {
    assert_eq!(response.status_code(), status);
    assert_eq!(
        response.json::<Value>(),
        json!({ "status": "fail", "message": message })
    );
}
