//! Integration tests for the unauthenticated site endpoints.

mod helpers;

use axum::http::StatusCode;

use helpers::{ALEPPO, DAMASCUS, TestApp};

async fn seed_events(app: &TestApp) {
    let token = app.superadmin_token().await;
    for (branch, title, date) in [
        (DAMASCUS, "Spring forum", "2025-03-02"),
        (DAMASCUS, "March hike", "2025-03-20T09:00"),
        (ALEPPO, "Aleppo workshop", "2025-03-15"),
        (ALEPPO, "Winter drive", "2024-12-01"),
    ] {
        app.create_event(&token, Some(branch), title, date).await;
    }
}

fn titles(body: &serde_json::Value) -> Vec<String> {
    body["items"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["title"].as_str().unwrap().to_string())
        .collect()
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
}

#[tokio::test]
async fn test_branches_are_public_and_ordered_by_governorate() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/public/branches", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let items = response.body["items"].as_array().unwrap();
    assert_eq!(items.len(), 2);
    // حلب sorts before دمشق.
    assert_eq!(items[0]["id"], ALEPPO);
    assert_eq!(items[1]["id"], DAMASCUS);
    assert_eq!(items[1]["governorate"], "دمشق");
}

#[tokio::test]
async fn test_events_newest_first_with_branch_fields() {
    let app = TestApp::new().await;
    seed_events(&app).await;

    let response = app.request("GET", "/api/public/events", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(
        titles(&response.body),
        vec![
            "March hike",
            "Aleppo workshop",
            "Spring forum",
            "Winter drive"
        ]
    );
    let first = &response.body["items"][0];
    assert_eq!(first["branch_name"], "شؤون الشباب - دمشق");
    assert_eq!(first["branch_governorate"], "دمشق");
}

#[tokio::test]
async fn test_events_filtered_by_branch_month_and_year() {
    let app = TestApp::new().await;
    seed_events(&app).await;

    let by_branch = app
        .request(
            "GET",
            &format!("/api/public/events?branchId={ALEPPO}"),
            None,
            None,
        )
        .await;
    assert_eq!(
        titles(&by_branch.body),
        vec!["Aleppo workshop", "Winter drive"]
    );

    let by_month = app
        .request("GET", "/api/public/events?month=3&year=2025", None, None)
        .await;
    assert_eq!(by_month.body["items"].as_array().unwrap().len(), 3);

    let by_year = app
        .request("GET", "/api/public/events?year=2024", None, None)
        .await;
    assert_eq!(titles(&by_year.body), vec!["Winter drive"]);

    let combined = app
        .request(
            "GET",
            &format!("/api/public/events?branchId={DAMASCUS}&month=3"),
            None,
            None,
        )
        .await;
    assert_eq!(
        titles(&combined.body),
        vec!["March hike", "Spring forum"]
    );

    let blank = app
        .request("GET", "/api/public/events?branchId=&month=", None, None)
        .await;
    assert_eq!(blank.body["items"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_event_filters_are_validated() {
    let app = TestApp::new().await;

    let month = app
        .request("GET", "/api/public/events?month=13", None, None)
        .await;
    assert_eq!(month.status, StatusCode::BAD_REQUEST);
    assert_eq!(month.body["error"], "Invalid month");

    let branch = app
        .request("GET", "/api/public/events?branchId=-4", None, None)
        .await;
    assert_eq!(branch.status, StatusCode::BAD_REQUEST);
    assert_eq!(branch.body["error"], "Invalid branch id");
}

#[tokio::test]
async fn test_single_event() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;
    let id = app
        .create_event(&token, Some(DAMASCUS), "Open day", "2025-09-09")
        .await;

    let found = app
        .request("GET", &format!("/api/public/events/{id}"), None, None)
        .await;
    assert_eq!(found.status, StatusCode::OK);
    assert_eq!(found.body["item"]["title"], "Open day");
    assert_eq!(found.body["item"]["branch_name"], "شؤون الشباب - دمشق");

    let missing = app
        .request("GET", "/api/public/events/9999", None, None)
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
    assert_eq!(missing.body["error"], "Event not found");

    let invalid = app
        .request("GET", "/api/public/events/abc", None, None)
        .await;
    assert_eq!(invalid.status, StatusCode::BAD_REQUEST);
    assert_eq!(invalid.body["error"], "Invalid event id");
}

#[tokio::test]
async fn test_event_body_is_validated() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;
    let path = format!("/api/admin/events?branchId={DAMASCUS}");

    let missing = app
        .request(
            "POST",
            &path,
            Some(serde_json::json!({ "title": "No details" })),
            Some(&token),
        )
        .await;
    assert_eq!(missing.status, StatusCode::BAD_REQUEST);
    assert_eq!(missing.body["error"], "Missing required event fields");

    let mut bad_date = helpers::event_body("Bad date", "09/09/2025");
    let response = app
        .request("POST", &path, Some(bad_date.clone()), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid event data");

    bad_date["eventDate"] = serde_json::json!("2025-09-09");
    bad_date["imageUrl"] = serde_json::json!("javascript:alert(1)");
    let response = app
        .request("POST", &path, Some(bad_date), Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_site_content_is_seeded() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/public/content", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["item"]["organization_name"], "شؤون الشباب");
    assert_eq!(
        response.body["item"]["volunteer_form_url"],
        "https://forms.google.com"
    );
}

#[tokio::test]
async fn test_malformed_event_body_is_bad_request() {
    let app = TestApp::new().await;
    let token = app.superadmin_token().await;

    let response = app
        .request_text(
            "POST",
            &format!("/api/admin/events?branchId={DAMASCUS}"),
            "{\"title\": ",
            Some(&token),
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Missing required event fields");
}

#[tokio::test]
async fn test_repeated_query_key_gets_json_error() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/public/events?branchId=1&branchId=2",
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.body["error"], "Invalid query string");
    assert_eq!(response.body["code"], "BAD_REQUEST");
}

#[tokio::test]
async fn test_detailed_health_reports_dependencies() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/health/detailed", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["ok"], true);
    assert_eq!(response.body["database"], "connected");
    assert_eq!(response.body["storage"], "available");
}
