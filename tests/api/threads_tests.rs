//! Thread API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_fail, data, TestApp};

#[tokio::test]
async fn test_add_thread_returns_added_thread() {
    let app = TestApp::new();
    app.register("dicoding").await;
    let (token, _) = app.login("dicoding").await;

    let response = app
        .server
        .post("/threads")
        .authorization_bearer(&token)
        .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let added_thread = &data(&response)["addedThread"];
    assert!(added_thread["id"].as_str().unwrap().starts_with("thread-"));
    assert_eq!(added_thread["title"], "sebuah thread");
    assert!(added_thread["owner"].as_str().unwrap().starts_with("user-"));
}

#[tokio::test]
async fn test_add_thread_ignores_client_owner() {
    let app = TestApp::new();
    let user_id = app.register("dicoding").await;
    let (token, _) = app.login("dicoding").await;

    let response = app
        .server
        .post("/threads")
        .authorization_bearer(&token)
        .json(&json!({ "title": "judul", "body": "isi", "owner": "user-someone-else" }))
        .await;

    assert_eq!(data(&response)["addedThread"]["owner"], user_id.as_str());
}

#[tokio::test]
async fn test_add_thread_without_token_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/threads")
        .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .await;

    assert_fail(&response, StatusCode::UNAUTHORIZED, "Missing authentication");
}

#[tokio::test]
async fn test_add_thread_with_invalid_token_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/threads")
        .authorization_bearer("forged.token.value")
        .json(&json!({ "title": "sebuah thread", "body": "sebuah body thread" }))
        .await;

    assert_fail(&response, StatusCode::UNAUTHORIZED, "Invalid token");
}

#[tokio::test]
async fn test_add_thread_with_empty_title_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;

    let response = app
        .server
        .post("/threads")
        .authorization_bearer(&token)
        .json(&json!({ "title": "", "body": "sebuah body thread" }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "gagal membuat thread baru, beberapa properti yang dibutuhkan tidak ada",
    );
}

#[tokio::test]
async fn test_add_thread_with_wrong_types_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;

    let response = app
        .server
        .post("/threads")
        .authorization_bearer(&token)
        .json(&json!({ "title": 123, "body": true }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "gagal membuat thread baru, tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_add_thread_with_long_title_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;

    let response = app
        .server
        .post("/threads")
        .authorization_bearer(&token)
        .json(&json!({ "title": "a".repeat(51), "body": "sebuah body thread" }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat thread baru karena jumlah karakter pada field title melebihi limit",
    );
}

#[tokio::test]
async fn test_get_thread_without_comments() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app.server.get(&format!("/threads/{}", thread_id)).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let thread = &data(&response)["thread"];
    assert_eq!(thread["id"], thread_id.as_str());
    assert_eq!(thread["title"], "sebuah thread");
    assert_eq!(thread["body"], "sebuah body thread");
    assert_eq!(thread["username"], "dicoding");
    assert!(thread["date"].as_str().unwrap().ends_with('Z'));
    assert_eq!(thread["comments"], json!([]));
}

#[tokio::test]
async fn test_get_thread_nests_comments_and_replies() {
    let app = TestApp::new();
    let author = app.access_token("dicoding").await;
    let guest = app.access_token("johndoe").await;
    let thread_id = app.add_thread(&author).await;

    let first = app.add_comment(&guest, &thread_id, "komentar pertama").await;
    let second = app.add_comment(&author, &thread_id, "komentar kedua").await;
    let reply_a = app.add_reply(&author, &thread_id, &first, "balasan a").await;
    let reply_b = app.add_reply(&guest, &thread_id, &first, "balasan b").await;

    let response = app.server.get(&format!("/threads/{}", thread_id)).await;
    let comments = &data(&response)["thread"]["comments"];

    assert_eq!(comments.as_array().unwrap().len(), 2);
    assert_eq!(comments[0]["id"], first.as_str());
    assert_eq!(comments[0]["username"], "johndoe");
    assert_eq!(comments[0]["content"], "komentar pertama");
    assert_eq!(comments[1]["id"], second.as_str());
    assert_eq!(comments[1]["replies"], json!([]));

    let replies = &comments[0]["replies"];
    assert_eq!(replies.as_array().unwrap().len(), 2);
    assert_eq!(replies[0]["id"], reply_a.as_str());
    assert_eq!(replies[0]["username"], "dicoding");
    assert_eq!(replies[1]["id"], reply_b.as_str());
    assert_eq!(replies[1]["content"], "balasan b");
}

#[tokio::test]
async fn test_get_missing_thread_fails() {
    let app = TestApp::new();

    let response = app.server.get("/threads/thread-404").await;

    assert_fail(&response, StatusCode::NOT_FOUND, "thread tidak ditemukan!");
}
