//! Integration tests for the role gate and branch scoping.

mod helpers;

use axum::http::StatusCode;
use serde_json::json;

use youthhub_auth::jwt::Principal;
use youthhub_core::types::UserId;
use youthhub_entity::user::UserRole;

use helpers::{ALEPPO, DAMASCUS, TestApp, event_body};

#[tokio::test]
async fn test_admin_cannot_reach_superadmin_routes() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;

    for (method, path) in [
        ("GET", "/api/superadmin/branches"),
        ("GET", "/api/superadmin/admins"),
        ("DELETE", "/api/superadmin/branches/2"),
        ("PUT", "/api/superadmin/content"),
    ] {
        let response = app.request(method, path, None, Some(&token)).await;
        assert_eq!(response.status, StatusCode::FORBIDDEN, "{method} {path}");
        assert_eq!(response.body["error"], "Forbidden");
    }
}

#[tokio::test]
async fn test_dashboard_requires_token() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/admin/events", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);

    let response = app
        .request("GET", "/api/superadmin/branches", None, None)
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_admin_branch_query_is_ignored() {
    let app = TestApp::new().await;
    let token = app.admin_token("damascus.lead", DAMASCUS).await;

    let response = app
        .request(
            "GET",
            &format!("/api/admin/branch?branchId={ALEPPO}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["id"], DAMASCUS);
}

#[tokio::test]
async fn test_admin_event_list_is_scoped() {
    let app = TestApp::new().await;
    let super_token = app.superadmin_token().await;
    let admin = app.admin_token("damascus.lead", DAMASCUS).await;

    app.create_event(&admin, None, "Damascus meetup", "2025-03-10")
        .await;
    app.create_event(&super_token, Some(ALEPPO), "Aleppo meetup", "2025-03-11")
        .await;

    let response = app
        .request(
            "GET",
            &format!("/api/admin/events?branchId={ALEPPO}"),
            None,
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Damascus meetup");
    assert_eq!(items[0]["branch_id"], DAMASCUS);

    let everything = app
        .request("GET", "/api/admin/events", None, Some(&super_token))
        .await;
    assert_eq!(everything.body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_admin_event_is_recorded_in_own_branch() {
    let app = TestApp::new().await;
    let admin = app.admin_token("damascus.lead", DAMASCUS).await;

    let id = app
        .create_event(&admin, Some(ALEPPO), "Pinned meetup", "2025-04-01")
        .await;

    let response = app
        .request("GET", &format!("/api/public/events/{id}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["branch_id"], DAMASCUS);
    assert!(response.body["item"]["created_by"].as_i64().is_some());
}

#[tokio::test]
async fn test_admin_cannot_touch_other_branch_event() {
    let app = TestApp::new().await;
    let super_token = app.superadmin_token().await;
    let admin = app.admin_token("damascus.lead", DAMASCUS).await;
    let id = app
        .create_event(&super_token, Some(ALEPPO), "Aleppo meetup", "2025-03-11")
        .await;

    let update = app
        .request(
            "PUT",
            &format!("/api/admin/events/{id}"),
            Some(event_body("Hijacked", "2025-03-12")),
            Some(&admin),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);
    assert_eq!(update.body["ok"], true);

    let delete = app
        .request("DELETE", &format!("/api/admin/events/{id}"), None, Some(&admin))
        .await;
    assert_eq!(delete.status, StatusCode::OK);

    let event = app
        .request("GET", &format!("/api/public/events/{id}"), None, None)
        .await;
    assert_eq!(event.status, StatusCode::OK);
    assert_eq!(event.body["item"]["title"], "Aleppo meetup");
    assert_eq!(event.body["item"]["event_date"], "2025-03-11");
}

#[tokio::test]
async fn test_admin_updates_and_deletes_own_event() {
    let app = TestApp::new().await;
    let admin = app.admin_token("damascus.lead", DAMASCUS).await;
    let id = app
        .create_event(&admin, None, "Draft title", "2025-05-01")
        .await;

    let update = app
        .request(
            "PUT",
            &format!("/api/admin/events/{id}"),
            Some(event_body("Final title", "2025-05-02")),
            Some(&admin),
        )
        .await;
    assert_eq!(update.status, StatusCode::OK);

    let event = app
        .request("GET", &format!("/api/public/events/{id}"), None, None)
        .await;
    assert_eq!(event.body["item"]["title"], "Final title");

    app.request("DELETE", &format!("/api/admin/events/{id}"), None, Some(&admin))
        .await;
    let gone = app
        .request("GET", &format!("/api/public/events/{id}"), None, None)
        .await;
    assert_eq!(gone.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_superadmin_must_name_a_branch() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;

    let branch = app
        .request("GET", "/api/admin/branch", None, Some(&token))
        .await;
    assert_eq!(branch.status, StatusCode::BAD_REQUEST);
    assert_eq!(branch.body["error"], "Branch is required");

    let create = app
        .request(
            "POST",
            "/api/admin/events",
            Some(event_body("Unplaced", "2025-06-01")),
            Some(&token),
        )
        .await;
    assert_eq!(create.status, StatusCode::BAD_REQUEST);
    assert_eq!(create.body["error"], "Branch is required");

    let unknown = app
        .request("GET", "/api/admin/branch?branchId=99", None, Some(&token))
        .await;
    assert_eq!(unknown.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_without_branch_is_rejected() {
    let app = TestApp::new().await;
    let principal = Principal {
        sub: UserId(42),
        username: "stray".to_string(),
        role: UserRole::Admin,
        branch_id: None,
    };
    let token = app.token_codec().issue(&principal).unwrap();

    let response = app
        .request("GET", "/api/admin/events", None, Some(&token))
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Admin has no assigned branch");
}

#[tokio::test]
async fn test_admin_updates_own_branch_contact() {
    let app = TestApp::new().await;
    let admin = app.admin_token("aleppo.lead", ALEPPO).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/admin/branch?branchId={DAMASCUS}"),
            Some(json!({
                "address": "Aleppo - Aziziyeh",
                "phone": "0944000002",
                "whatsapp": "0944000002",
                "facebook": "https://facebook.com/aleppo.youth",
                "telegram": "",
            })),
            Some(&admin),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let aleppo = app
        .request("GET", "/api/admin/branch", None, Some(&admin))
        .await;
    assert_eq!(aleppo.body["item"]["address"], "Aleppo - Aziziyeh");
    assert_eq!(
        aleppo.body["item"]["facebook"],
        "https://facebook.com/aleppo.youth"
    );
    assert!(aleppo.body["item"]["telegram"].is_null());

    let super_token = app.superadmin_token().await;
    let damascus = app
        .request(
            "GET",
            &format!("/api/admin/branch?branchId={DAMASCUS}"),
            None,
            Some(&super_token),
        )
        .await;
    assert_eq!(damascus.body["item"]["address"], "دمشق - المزة");
}

#[tokio::test]
async fn test_branch_contact_requires_fields() {
    let app = TestApp::new().await;
    let admin = app.admin_token("aleppo.lead", ALEPPO).await;

    let response = app
        .request(
            "PUT",
            "/api/admin/branch",
            Some(json!({ "address": "  ", "phone": "1", "whatsapp": "1" })),
            Some(&admin),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(
        response.body["error"],
        "Address, phone, and WhatsApp are required"
    );
}
