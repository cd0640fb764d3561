//! Authentication API Tests

use axum::http::StatusCode;
use serde_json::json;

use crate::common::{assert_fail, data, TestApp, PASSWORD};

#[tokio::test]
async fn test_login_returns_token_pair() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let response = app
        .server
        .post("/authentications")
        .json(&json!({ "username": "dicoding", "password": PASSWORD }))
        .await;

    assert_eq!(response.status_code(), StatusCode::CREATED);
    let data = data(&response);
    assert!(data["accessToken"].is_string());
    assert!(data["refreshToken"].is_string());
}

#[tokio::test]
async fn test_login_with_unknown_username_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/authentications")
        .json(&json!({ "username": "ghost", "password": PASSWORD }))
        .await;

    assert_fail(&response, StatusCode::BAD_REQUEST, "username tidak ditemukan");
}

#[tokio::test]
async fn test_login_with_wrong_password_fails() {
    let app = TestApp::new();
    app.register("dicoding").await;

    let response = app
        .server
        .post("/authentications")
        .json(&json!({ "username": "dicoding", "password": "wrong" }))
        .await;

    assert_fail(
        &response,
        StatusCode::UNAUTHORIZED,
        "kredensial yang Anda masukkan salah",
    );
}

#[tokio::test]
async fn test_login_with_missing_password_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .post("/authentications")
        .json(&json!({ "username": "dicoding" }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "harus mengirimkan username dan password",
    );
}

#[tokio::test]
async fn test_refresh_issues_usable_access_token() {
    let app = TestApp::new();
    app.register("dicoding").await;
    let (_, refresh_token) = app.login("dicoding").await;

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": refresh_token }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let access_token = data(&response)["accessToken"].as_str().unwrap().to_owned();

    app.add_thread(&access_token).await;
}

#[tokio::test]
async fn test_refresh_with_unsigned_token_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": "not.a.token" }))
        .await;

    assert_fail(&response, StatusCode::BAD_REQUEST, "refresh token tidak valid");
}

#[tokio::test]
async fn test_refresh_with_access_token_fails() {
    let app = TestApp::new();
    app.register("dicoding").await;
    let (access_token, _) = app.login("dicoding").await;

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": access_token }))
        .await;

    assert_fail(&response, StatusCode::BAD_REQUEST, "refresh token tidak valid");
}

#[tokio::test]
async fn test_refresh_without_token_fails() {
    let app = TestApp::new();

    let response = app.server.put("/authentications").json(&json!({})).await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "harus mengirimkan token refresh",
    );
}

#[tokio::test]
async fn test_logout_revokes_refresh_token() {
    let app = TestApp::new();
    app.register("dicoding").await;
    let (_, refresh_token) = app.login("dicoding").await;

    let response = app
        .server
        .delete("/authentications")
        .json(&json!({ "refreshToken": refresh_token }))
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.json::<serde_json::Value>(), json!({ "status": "success" }));

    let response = app
        .server
        .put("/authentications")
        .json(&json!({ "refreshToken": refresh_token }))
        .await;
    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "refresh token tidak ditemukan di database",
    );
}

#[tokio::test]
async fn test_logout_with_unknown_token_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .delete("/authentications")
        .json(&json!({ "refreshToken": "never-issued" }))
        .await;

    assert_fail(
        &response,
        StatusCode::BAD_REQUEST,
        "refresh token tidak ditemukan di database",
    );
}

#[tokio::test]
async fn test_logout_with_non_string_token_fails() {
    let app = TestApp::new();

    let response = app
        .server
        .delete("/authentications")
        .json(&json!({ "refreshToken": 123 }))
        .await;

    assert_fail(&response, StatusCode::BAD_REQUEST, "refresh token harus string");
}
