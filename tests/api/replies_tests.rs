//! Reply API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_fail, data, TestApp};

struct Discussion {
    app: TestApp,
    token: String,
    thread_id: String,
    comment_id: String,
}

async fn discussion() -> Discussion {
    let app = TestApp::new();
    let token = app.access_token("dicoding").await;
    let thread_id = app.add_thread(&token).await;
    let comment_id = app.add_comment(&token, &thread_id, "sebuah comment").await;

    Discussion {
        app,
        token,
        thread_id,
        comment_id,
    }
}

impl Discussion {
    fn replies_path(&self) -> String {
        format!(
            "/threads/{}/comments/{}/replies",
            self.thread_id, self.comment_id
        )
    }
}

#[tokio::test]
async fn test_add_reply_returns_added_reply() {
    let d = discussion().await;

    let response = d
        .app
        .server
        .post(&d.replies_path())
        .authorization_bearer(&d.token)
        .json(&json!({ "content": "sebuah balasan" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let added_reply = &data(&response)["addedReply"];
    assert!(added_reply["id"].as_str().unwrap().starts_with("reply-"));
    assert_eq!(added_reply["content"], "sebuah balasan");
}

#[tokio::test]
async fn test_add_reply_to_missing_comment_fails() {
    let d = discussion().await;

    let response = d
        .app
        .server
        .post(&format!("/threads/{}/comments/comment-404/replies", d.thread_id))
        .authorization_bearer(&d.token)
        .json(&json!({ "content": "sebuah balasan" }))
        .await;

    assert_fail(&response, StatusCode::NOT_FOUND, "komentar tidak ditemukan!");
}

#[tokio::test]
async fn test_add_reply_to_missing_thread_fails() {
    let d = discussion().await;

    let response = d
        .app
        .server
        .post(&format!("/threads/thread-404/comments/{}/replies", d.comment_id))
        .authorization_bearer(&d.token)
        .json(&json!({ "content": "sebuah balasan" }))
        .await;

    assert_fail(&response, StatusCode::NOT_FOUND, "thread tidak ditemukan!");
}

#[tokio::test]
async fn test_add_reply_without_content_fails() {
    let d = discussion().await;

    let response = d
        .app
        .server
        .post(&d.replies_path())
        .authorization_bearer(&d.token)
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "gagal membuat reply baru, beberapa properti yang dibutuhkan tidak ada",
    );
}

#[tokio::test]
async fn test_delete_reply_masks_content() {
    let d = discussion().await;
    let reply_id = d
        .app
        .add_reply(&d.token, &d.thread_id, &d.comment_id, "rahasia")
        .await;

    let response = d
        .app
        .server
        .delete(&format!("{}/{}", d.replies_path(), reply_id))
        .authorization_bearer(&d.token)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let response = d.app.server.get(&format!("/threads/{}", d.thread_id)).await;
    let replies = &data(&response)["thread"]["comments"][0]["replies"];
    assert_eq!(replies[0]["id"], reply_id.as_str());
    assert_eq!(replies[0]["content"], "**balasan telah dihapus**");
    assert!(!response.text().contains("rahasia"));
}

#[tokio::test]
async fn test_delete_reply_of_another_user_fails() {
    let d = discussion().await;
    let reply_id = d
        .app
        .add_reply(&d.token, &d.thread_id, &d.comment_id, "sebuah balasan")
        .await;
    let stranger = d.app.access_token("johndoe").await;

    let response = d
        .app
        .server
        .delete(&format!("{}/{}", d.replies_path(), reply_id))
        .authorization_bearer(&stranger)
        .await;

    assert_fail(
        &response,
        StatusCode::FORBIDDEN,
        "Gagal menghapus pesan reply, anda bukan pemilik reply ini!.",
    );
}

#[tokio::test]
async fn test_delete_missing_reply_fails() {
    let d = discussion().await;

    let response = d
        .app
        .server
        .delete(&format!("{}/reply-404", d.replies_path()))
        .authorization_bearer(&d.token)
        .await;

    assert_fail(&response, StatusCode::NOT_FOUND, "balasan tidak ditemukan!");
}

#[tokio::test]
async fn test_deleted_comment_keeps_its_replies() {
    let d = discussion().await;
    d.app
        .add_reply(&d.token, &d.thread_id, &d.comment_id, "masih terlihat")
        .await;

    d.app
        .server
        .delete(&format!("/threads/{}/comments/{}", d.thread_id, d.comment_id))
        .authorization_bearer(&d.token)
        .await;

    let response = d.app.server.get(&format!("/threads/{}", d.thread_id)).await;
    let comment = &data(&response)["thread"]["comments"][0];
    assert_eq!(comment["content"], "**komentar telah dihapus**");
    assert_eq!(comment["replies"][0]["content"], "masih terlihat");
}
