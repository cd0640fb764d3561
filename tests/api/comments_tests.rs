//! Comment API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_fail, data, TestApp};

#[tokio::test]
async fn test_add_comment_returns_added_comment() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .authorization_bearer(&token)
        .json(&json!({ "content": "sebuah comment" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let added_comment = &data(&response)["addedComment"];
    assert!(added_comment["id"].as_str().unwrap().starts_with("comment-"));
    assert_eq!(added_comment["content"], "sebuah comment");
    assert!(added_comment["owner"].as_str().unwrap().starts_with("user-"));
}

#[tokio::test]
async fn test_add_comment_to_missing_thread_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;

    let response = app
        .server
        .post("/threads/thread-404/comments")
        .authorization_bearer(&token)
        .json(&json!({ "content": "sebuah comment" }))
        .await;

    assert_fail(&response, StatusCode::NOT_FOUND, "thread tidak ditemukan!");
}

#[tokio::test]
async fn test_add_comment_without_content_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .authorization_bearer(&token)
        .json(&json!({}))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "gagal membuat komentar baru, beberapa properti yang dibutuhkan tidak ada",
    );
}

#[tokio::test]
async fn test_add_comment_with_non_string_content_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .authorization_bearer(&token)
        .json(&json!({ "content": ["sebuah comment"] }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "gagal membuat komentar baru, tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_add_comment_without_token_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app
        .server
        .post(&format!("/threads/{}/comments", thread_id))
        .json(&json!({ "content": "sebuah comment" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_delete_comment_masks_content() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&token, &thread_id, "rahasia").await;

    let response = app
        .server
        .delete(&format!("/threads/{}/comments/{}", thread_id, comment_id))
        .authorization_bearer(&token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "success" }));

    let response = app.server.get(&format!("/threads/{}", thread_id)).await;
    let comments = &data(&response)["thread"]["comments"];
    assert_eq!(comments[0]["id"], comment_id.as_str());
    assert_eq!(comments[0]["content"], "**komentar telah dihapus**");
    assert!(!response.text().contains("rahasia"));
}

#[tokio::test]
async fn test_delete_comment_of_another_user_fails() {
    let app = TestApp::new();
    let owner = app.access_token("dicoding").await;
    let stranger = app.access_token("johndoe").await;
    let thread_id = app.add_thread(&owner).await;
    let comment_id = app.add_comment(&owner, &thread_id, "sebuah comment").await;

    let response = app
        .server
        .delete(&format!("/threads/{}/comments/{}", thread_id, comment_id))
        .authorization_bearer(&stranger)
        .await;

    assert_fail(
        &response,
        StatusCode::FORBIDDEN,
        "Gagal menghapus komentar, anda bukan pemilik komentar ini!",
    );
}

#[tokio::test]
async fn test_delete_missing_comment_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;

    let response = app
        .server
        .delete(&format!("/threads/{}/comments/comment-404", thread_id))
        .authorization_bearer(&token)
        .await;

    assert_fail(&response, StatusCode::NOT_FOUND, "komentar tidak ditemukan!");
}

#[tokio::test]
async fn test_delete_comment_in_missing_thread_fails() {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;

    let response = app
        .server
        .delete("/threads/thread-404/comments/comment-404")
        .authorization_bearer(&token)
        .await;

    assert_fail(&response, StatusCode::NOT_FOUND, "thread tidak ditemukan!");
}
