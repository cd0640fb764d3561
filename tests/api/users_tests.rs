//! User Registration API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_fail, data, TestApp};

#[tokio::test]
async fn test_register_returns_added_user() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users")
        .json(&json!({
            "username": "dicoding",
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let added_user = &data(&response)["addedUser"];
    assert!(added_user["id"].as_str().unwrap().starts_with("user-"));
    assert_eq!(added_user["username"], "dicoding");
    assert_eq!(added_user["fullname"], "Dicoding Indonesia");
    assert!(added_user.get("password").is_none());
}

#[tokio::test]
async fn test_register_with_missing_property_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users")
        .json(&json!({ "username": "dicoding", "fullname": "Dicoding Indonesia" }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada",
    );
}

#[tokio::test]
async fn test_register_with_wrong_types_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users")
        .json(&json!({ "username": "dicoding", "password": "secret", "fullname": ["Dicoding"] }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena tipe data tidak sesuai",
    );
}

#[tokio::test]
async fn test_register_with_long_username_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users")
        .json(&json!({
            "username": "dicoding".repeat(7),
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena karakter username melebihi batas limit",
    );
}

#[tokio::test]
async fn test_register_with_restricted_character_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/users")
        .json(&json!({
            "username": "dicoding indonesia",
            "password": "secret",
            "fullname": "Dicoding Indonesia",
        }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena username mengandung karakter terlarang",
    );
}

#[tokio::test]
async fn test_register_with_taken_username_fails() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let response = app
        .server
        .post("/users")
        .json(&json!({
            "username": "dicoding",
            "password": "other",
            "fullname": "Someone Else",
        }))
        .await;

    assert_fail(&response, StatusCode::BAD_REQUEST, "username tidak tersedia");
}

#[tokio::test]
async fn test_register_with_empty_body_fails() {
    let app = TestApp::new();

    let response = app.server.post("/users").await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada",
    );
}
