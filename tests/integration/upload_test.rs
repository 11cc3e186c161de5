//! Integration tests for image uploads and media serving.

mod helpers;

use axum::http::{StatusCode, header};

use helpers::{ALEPPO, DAMASCUS, TestApp};

const PNG_BYTES: &[u8] = b"\x89PNG\r\n\x1a\nnot-really-a-png";

#[tokio::test]
async fn test_upload_then_serve() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;

    let response = app
        .upload(&token, "/api/admin/uploads", "poster.png", "image/png", PNG_BYTES)
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let item = &response.body["item"];
    let key = item["key"].as_str().unwrap();
    assert!(key.starts_with("branches/1/"), "unexpected key {key}");
    assert!(key.ends_with(".png"));
    assert_eq!(item["contentType"], "image/png");
    assert_eq!(item["size"], PNG_BYTES.len());
    let url = item["url"].as_str().unwrap();
    assert_eq!(url, format!("/api/public/media/{key}"));

    let media = app.get_raw(url).await;
    assert_eq!(media.status, StatusCode::OK);
    assert_eq!(media.headers[header::CONTENT_TYPE], "image/png");
    assert_eq!(&media.body[..], PNG_BYTES);
}

#[tokio::test]
async fn test_admin_upload_ignores_requested_branch() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;

    let response = app
        .upload(
            &token,
            &format!("/api/admin/uploads?branchId={ALEPPO}"),
            "poster.jpg",
            "image/jpeg",
            b"jpeg-bytes",
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let key = response.body["item"]["key"].as_str().unwrap();
    assert!(key.starts_with("branches/1/"));
    assert!(key.ends_with(".jpg"));
}

#[tokio::test]
async fn test_superadmin_upload_needs_branch() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;

    let unscoped = app
        .upload(&token, "/api/admin/uploads", "a.webp", "image/webp", b"webp")
        .await;
    assert_eq!(unscoped.status, StatusCode::BAD_REQUEST);
    assert_eq!(unscoped.body["error"], "Branch is required");

    let scoped = app
        .upload(
            &token,
            &format!("/api/admin/uploads?branchId={ALEPPO}"),
            "a.webp",
            "image/webp",
            b"webp",
        )
        .await;
    assert_eq!(scoped.status, StatusCode::CREATED);
    assert!(
        scoped.body["item"]["key"]
            .as_str()
            .unwrap()
            .starts_with("branches/2/")
    );
}

#[tokio::test]
async fn test_unsupported_type_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;

    let response = app
        .upload(&token, "/api/admin/uploads", "notes.txt", "text/plain", b"hello")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Unsupported file type");
}

#[tokio::test]
async fn test_oversized_upload_rejected() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;
    let limit = app.config.storage.max_upload_size_bytes as usize;
    let data = vec![0u8; limit + 1];

    let response = app
        .upload(&token, "/api/admin/uploads", "big.png", "image/png", &data)
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        format!("File exceeds the maximum size of {limit} bytes")
    );
}

#[tokio::test]
async fn test_upload_requires_dashboard_role() {
    let app = TestApp::new().await;

    let response = app
        .upload("bogus", "/api/admin/uploads", "a.png", "image/png", PNG_BYTES)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_missing_media_is_not_found() {
    let app = TestApp::new().await;

    let response = app.get_raw("/api/public/media/branches/1/missing.png").await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_media_key_cannot_escape_root() {
    let app = TestApp::new().await;

    let response = app
        .get_raw("/api/public/media/branches/%2E%2E/%2E%2E/secret.png")
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_directory_key_is_not_found() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;
    let uploaded = app
        .upload(&token, "/api/admin/uploads", "poster.png", "image/png", PNG_BYTES)
        .await;
    assert_eq!(uploaded.status, StatusCode::CREATED);

    for path in ["/api/public/media/branches/1", "/api/public/media/branches"] {
        let response = app.get_raw(path).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }
}
