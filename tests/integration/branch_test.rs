//! Integration tests for superadmin management of branches, admins and content.

mod helpers;

use axum::http::StatusCode;
use serde_json::{Value, json};

use helpers::{ADMIN_PASSWORD, ALEPPO, DAMASCUS, TestApp};

fn branch_body(name: &str) -> Value {
    json!({
        "name": name,
        "governorate": "اللاذقية",
        "address": "اللاذقية - الكورنيش",
        "phone": "0933000003",
        "whatsapp": "0933000003",
        "instagram": "https://instagram.com/latakia.youth",
    })
}

#[tokio::test]
async fn test_branch_lifecycle() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;

    let created = app
        .request(
            "POST",
            "/api/superadmin/branches",
            Some(branch_body("شؤون الشباب - اللاذقية")),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["ok"], true);
    let id = created.body["id"].as_i64().unwrap();

    let listed = app
        .request("GET", "/api/superadmin/branches", None, Some(&token))
        .await;
    let items = listed.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 3);
    let latakia = items.iter().find(|b| b["id"] == id).unwrap();
    assert_eq!(latakia["admins_count"], 0);
    assert_eq!(latakia["events_count"], 0);
    assert_eq!(latakia["instagram"], "https://instagram.com/latakia.youth");

    let mut renamed = branch_body("فرع اللاذقية");
    renamed["instagram"] = json!("");
    let updated = app
        .request(
            "PUT",
            &format!("/api/superadmin/branches/{id}"),
            Some(renamed),
            Some(&token),
        )
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let public = app.request("GET", "/api/public/branches", None, None).await;
    let row = public.body["items"]
        .as_array()
        .unwrap()
        .iter()
        .find(|b| b["id"] == id)
        .cloned()
        .unwrap();
    assert_eq!(row["name"], "فرع اللاذقية");
    assert!(row["instagram"].is_null());

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/superadmin/branches/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let again = app
        .request(
            "DELETE",
            &format!("/api/superadmin/branches/{id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::NOT_FOUND);
    assert_eq!(again.body["error"], "Branch not found");
}

#[tokio::test]
async fn test_branch_create_validation() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;

    let missing = app
        .request(
            "POST",
            "/api/superadmin/branches",
            Some(json!({ "name": "Half a branch" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "Missing required branch fields");

    let mut bad_link = branch_body("Bad link branch");
    bad_link["facebook"] = json!("not a url");
    let invalid = app
        .request(
            "POST",
            "/api/superadmin/branches",
            Some(bad_link),
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Invalid social link");
    assert_eq!(invalid.body["details"]["fields"], json!(["facebook"]));
}

#[tokio::test]
async fn test_referenced_branch_cannot_be_deleted() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;
    app.create_event(&token, Some(ALEPPO), "Aleppo fair", "2025-02-02")
        .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/superadmin/branches/{ALEPPO}"),
            None,
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.body["code"], "CONFLICT");
    assert_eq!(
        response.body["details"],
        json!({ "adminsCount": 0, "eventsCount": 1 })
    );

    let relations = app
        .request(
            "GET",
            &format!("/api/superadmin/branches/{ALEPPO}/relations"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(relations.status, StatusCode::OK);
    assert_eq!(
        relations.body["item"],
        json!({ "adminsCount": 0, "eventsCount": 1 })
    );

    let branches = app.request("GET", "/api/public/branches", None, None).await;
    assert_eq!(branches.body["items"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn test_branch_path_ids_are_checked() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;

    let invalid = app
        .request(
            "GET",
            "/api/superadmin/branches/abc/relations",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Invalid branch id");

    let missing = app
        .request(
            "GET",
            "/api/superadmin/branches/404/relations",
            None,
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_admin_accounts() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;
    let admin_id = app.create_admin("damascus.lead", DAMASCUS).await;

    let listed = app
        .request("GET", "/api/superadmin/admins", None, Some(&token))
        .await;
    let items = listed.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    assert_eq!(items[0]["role"], "superadmin");
    assert_eq!(items[1]["username"], "damascus.lead");
    assert_eq!(items[1]["branch_name"], "شؤون الشباب - دمشق");
    assert!(items[1].get("password_hash").is_none());

    let duplicate = app
        .request(
            "POST",
            "/api/superadmin/admins",
            Some(json!({
                "username": "damascus.lead",
                "displayName": "Again",
                "password": ADMIN_PASSWORD,
                "branchId": DAMASCUS,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(duplicate.status, StatusCode::CONFLICT);
    assert_eq!(duplicate.body["error"], "Username already exists");

    let unknown_branch = app
        .request(
            "POST",
            "/api/superadmin/admins",
            Some(json!({
                "username": "nowhere.lead",
                "displayName": "Nowhere",
                "password": ADMIN_PASSWORD,
                "branchId": 77,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(unknown_branch.status, StatusCode::BAD_REQUEST);
    assert_eq!(unknown_branch.body["error"], "Branch not found");

    let weak = app
        .request(
            "POST",
            "/api/superadmin/admins",
            Some(json!({
                "username": "weak.lead",
                "displayName": "Weak",
                "password": "password",
                "branchId": DAMASCUS,
            })),
            Some(&token),
        )
        .await;
    assert_eq!(weak.status, StatusCode::BAD_REQUEST);

    let missing = app
        .request(
            "POST",
            "/api/superadmin/admins",
            Some(json!({ "username": "incomplete" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "Missing required admin fields");

    let reassigned = app
        .request(
            "PUT",
            &format!("/api/superadmin/admins/{admin_id}/branch"),
            Some(json!({ "branchId": ALEPPO })),
            Some(&token),
        )
        .await;
    assert_eq!(reassigned.status, StatusCode::OK);

    // The branch is read at login, so a fresh token carries the new one.
    let admin_token = app.login("damascus.lead", ADMIN_PASSWORD).await;
    let me = app
        .request("GET", "/api/admin/me", None, Some(&admin_token))
        .await;
    assert_eq!(me.body["user"]["branchId"], ALEPPO);
}

#[tokio::test]
async fn test_admin_password_reset_and_delete() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;
    let admin_id = app.create_admin("aleppo.lead", ALEPPO).await;
    let admin_token = app.login("aleppo.lead", ADMIN_PASSWORD).await;
    let event_id = app
        .create_event(&admin_token, None, "Aleppo cleanup", "2025-07-07")
        .await;

    let reset = app
        .request(
            "PUT",
            &format!("/api/superadmin/admins/{admin_id}/password"),
            Some(json!({ "password": "Harbor-Violet-Compass-77" })),
            Some(&token),
        )
        .await;
    assert_eq!(reset.status, StatusCode::OK);
    app.login("aleppo.lead", "Harbor-Violet-Compass-77").await;

    let deleted = app
        .request(
            "DELETE",
            &format!("/api/superadmin/admins/{admin_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(deleted.status, StatusCode::OK);

    let login = app
        .request(
            "POST",
            "/api/auth/login",
            Some(json!({ "username": "aleppo.lead", "password": "Harbor-Violet-Compass-77" })),
            None,
        )
        .await;
    assert_eq!(login.status, StatusCode::UNAUTHORIZED);

    // The event outlives its author.
    let event = app
        .request("GET", &format!("/api/public/events/{event_id}"), None, None)
        .await;
    assert_eq!(event.status, StatusCode::OK);
    assert!(event.body["item"]["created_by"].is_null());
}

#[tokio::test]
async fn test_superadmin_is_never_deleted() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;
    let super_id: i64 = sqlx::query_scalar("SELECT id FROM users WHERE role = 'superadmin'")
        .fetch_one(&app.db_pool)
        .await
        .unwrap();

    let response = app
        .request(
            "DELETE",
            &format!("/api/superadmin/admins/{super_id}"),
            None,
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.superadmin_token().await;
}

#[tokio::test]
async fn test_content_update() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;
    let content = json!({
        "organizationName": "Youth Affairs",
        "slogan": "Empowered youth",
        "definitionText": "Definition",
        "visionText": "Vision",
        "missionText": "Mission",
        "goalsText": "1) Goals",
        "volunteerFormUrl": "https://forms.example.org/volunteer",
    });

    let updated = app
        .request("PUT", "/api/superadmin/content", Some(content), Some(&token))
        .await;
    assert_eq!(updated.status, StatusCode::OK);

    let public = app.request("GET", "/api/public/content", None, None).await;
    assert_eq!(public.body["item"]["organization_name"], "Youth Affairs");
    assert_eq!(
        public.body["item"]["volunteer_form_url"],
        "https://forms.example.org/volunteer"
    );

    let invalid = app
        .request(
            "PUT",
            "/api/superadmin/content",
            Some(json!({ "slogan": "only this" })),
            Some(&token),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Missing required content fields");
}
