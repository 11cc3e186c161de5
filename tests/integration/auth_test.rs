//! Integration tests for login and token handling.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use youthhub_auth::jwt::Principal;
use youthhub_auth::password::legacy_digest;
use youthhub_core::types::{BranchId, UserId};
use youthhub_entity::user::UserRole;

use helpers::{DAMASCUS, SUPERADMIN_PASSWORD, SUPERADMIN_USERNAME, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({
                "username": SUPERADMIN_USERNAME,
                "password": SUPERADMIN_PASSWORD,
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some_and(|t| !t.is_empty()));
    let user = &response.body["user"];
    assert_eq!(user["username"], "superadmin");
    assert_eq!(user["role"], "superadmin");
    assert!(user["branchId"].is_null());
    assert!(user.get("displayName").is_some());
    assert!(user.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "superadmin", "password": "wrong" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_unknown_user_matches_wrong_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "nobody", "password": "admin123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid credentials");
}

#[tokio::test]
async fn test_login_requires_both_fields() {
    let app = TestApp::new().await;

    let missing = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "superadmin" })),
            None,
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "Username and password are required");

    let no_body = app.request("POST", "/api/auth/login", None, None).await;
    assert_eq!(no_body.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_legacy_digest_is_upgraded_on_login() {
    let app = TestApp::new().await;
    sqlx::query(
        "INSERT INTO users (username, display_name, password_hash, role, branch_id) \
         VALUES (?, ?, ?, 'admin', ?)",
    )
    .bind("legacy")
    .bind("Legacy Admin")
    .bind(legacy_digest("old-password"))
    .bind(DAMASCUS)
    .execute(&app.db_pool)
    .await
    .unwrap();

    app.login("legacy", "old-password").await;

    let stored: String = sqlx::query_scalar("SELECT password_hash FROM users WHERE username = ?")
        .bind("legacy")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();
    assert!(stored.starts_with("$argon2id$"));

    // The upgraded digest still accepts the same password.
    app.login("legacy", "old-password").await;
}

#[tokio::test]
async fn test_me_authenticated() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;

    let response = app.request("GET", "/api/auth/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    let user = &response.body["user"];
    assert_eq!(user["username"], "superadmin");
    assert_eq!(user["role"], "superadmin");
    assert!(user["sub"].as_i64().is_some());
}

#[tokio::test]
async fn test_admin_me_reports_branch() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;

    let response = app.request("GET", "/api/admin/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["role"], "admin");
    assert_eq!(response.body["user"]["branchId"], DAMASCUS);
}

#[tokio::test]
async fn test_me_unauthenticated() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/auth/me", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Unauthorized");
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/auth/me", None, Some("not-a-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid token");
}

#[tokio::test]
async fn test_token_from_other_secret_rejected() {
    let app = TestApp::new().await;
    let principal = Principal {
        sub: UserId(1),
        username: "superadmin".to_string(),
        role: UserRole::SuperAdmin,
        branch_id: None,
    };
    let forged = youthhub_auth::jwt::TokenCodec::from_secret(b"someone-else", 3600)
        .issue(&principal)
        .unwrap();

    let response = app.request("GET", "/api/auth/me", None, Some(&forged)).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid token");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let principal = Principal {
        sub: UserId(1),
        username: "superadmin".to_string(),
        role: UserRole::SuperAdmin,
        branch_id: None,
    };
    let now = chrono::Utc::now().timestamp();
    let expired = helpers::sign(&principal, now - 120, 60);

    let response = app
        .request("GET", "/api/auth/me", None, Some(&expired))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "Invalid token");
}

#[tokio::test]
async fn test_token_claims_are_trusted_without_lookup() {
    let app = TestApp::new().await;
    // Nobody with this id exists; the signature alone authenticates.
    let principal = Principal {
        sub: UserId(999),
        username: "ghost".to_string(),
        role: UserRole::Admin,
        branch_id: Some(BranchId(DAMASCUS)),
    };
    let token = app.token_codec().issue(&principal).unwrap();

    let response = app.request("GET", "/api/admin/me", None, Some(&token)).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["user"]["username"], "ghost");
}

#[tokio::test]
async fn test_malformed_login_body_is_bad_request() {
    let app = TestApp::new().await;

    let response = app
        .request_text("POST", "/api/auth/login", "{not json", None)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Username and password are required");
    assert_eq!(response.body["code"], "BAD_REQUEST");
}
