//! Integration tests for the Layout Mockup Web API.
//!
//! These tests require the `web` feature to be enabled:
//! ```bash
//! cargo test --features web web_api
//! ```

#![cfg(feature = "web")]

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tower::ServiceExt;

use layout_mockup::config::{Config, SessionConfig};
use layout_mockup::web::{create_router, AppState};

mod fixtures;
use fixtures::*;

/// Creates a test router over the account fixture.
fn create_test_app() -> (axum::Router, TempDir) {
    create_test_app_with_sessions(SessionConfig::default())
}

fn create_test_app_with_sessions(sessions: SessionConfig) -> (axum::Router, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    let mut config = Config::new();
    config.export.output_dir = temp_dir.path().to_path_buf();
    config.sessions = sessions;

    let state = AppState::with_seed(&config, test_layout_two_sections());
    (create_router(state), temp_dir)
}

/// Sends a request and returns status plus JSON body (Null when empty).
async fn send(app: &axum::Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let request = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => request
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_vec(&body).unwrap())),
        None => request.body(Body::empty()),
    }
    .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&body).unwrap_or(Value::Null);

    (status, json)
}

/// Creates a session on the default seed and returns its id.
async fn create_session(app: &axum::Router) -> String {
    let (status, json) = send(app, "POST", "/api/sessions", None).await;
    assert_eq!(status, StatusCode::CREATED);
    json["session_id"].as_str().unwrap().to_string()
}

async fn act(app: &axum::Router, id: &str, action: Value) -> (StatusCode, Value) {
    send(app, "POST", &format!("/api/sessions/{id}/actions"), Some(action)).await
}

fn field_ids(view: &Value, section: usize) -> Vec<String> {
    view["sections"][section]["fields"]
        .as_array()
        .unwrap()
        .iter()
        .map(|f| f["id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let (app, _temp_dir) = create_test_app();

    let (status, json) = send(&app, "GET", "/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert!(json["version"].is_string());
}

// ============================================================================
// Session Lifecycle Tests
// ============================================================================

#[tokio::test]
async fn test_create_session_returns_view() {
    let (app, _temp_dir) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/sessions", None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(json["session_id"].is_string());
    assert_eq!(json["view"]["sections"].as_array().unwrap().len(), 2);
    assert_eq!(field_ids(&json["view"], 0), ["Name", "Phone", "Email"]);
    assert_eq!(json["view"]["modified"], false);
}

#[tokio::test]
async fn test_create_session_with_document() {
    let (app, _temp_dir) = create_test_app();
    let document = json!({
        "sections": [{"name": "Contact", "fields": [
            {"id": "first", "label": "First Name", "visible": true},
            {"id": "last", "label": "Last Name", "visible": false}
        ]}]
    });

    let (status, json) = send(&app, "POST", "/api/sessions", Some(document)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(json["view"]["sections"][0]["name"], "Contact");
    assert_eq!(json["view"]["hidden_count"], 1);
}

#[tokio::test]
async fn test_create_session_invalid_document() {
    let (app, _temp_dir) = create_test_app();

    let (status, json) = send(&app, "POST", "/api/sessions", Some(json!({"sections": []}))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Invalid layout document");
    assert!(json["details"].as_str().unwrap().contains("at least one section"));
}

#[tokio::test]
async fn test_session_limit() {
    let (app, _temp_dir) = create_test_app_with_sessions(SessionConfig {
        max_sessions: 1,
        idle_timeout_minutes: 60,
    });

    create_session(&app).await;
    let (status, json) = send(&app, "POST", "/api/sessions", None).await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(json["error"].as_str().unwrap().contains("limit"));
}

#[tokio::test]
async fn test_delete_session() {
    let (app, _temp_dir) = create_test_app();
    let id = create_session(&app).await;

    let (status, _) = send(&app, "DELETE", &format!("/api/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NO_CONTENT);

    let (status, json) = send(&app, "GET", &format!("/api/sessions/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(json["error"].as_str().unwrap().contains("not found"));
}

#[tokio::test]
async fn test_unknown_session() {
    let (app, _temp_dir) = create_test_app();

    let (status, _) = send(&app, "GET", "/api/sessions/not-a-session", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = act(
        &app,
        "00000000-0000-0000-0000-000000000000",
        json!({"action": "reset"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

// ============================================================================
// Action Tests
// ============================================================================

#[tokio::test]
async fn test_select_swap_hide_reset() {
    let (app, _temp_dir) = create_test_app();
    let id = create_session(&app).await;

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "select", "section": ACCOUNT, "field": "Name"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"]["outcome"], "selected");
    assert_eq!(json["view"]["selection"]["field"], "Name");
    assert_eq!(json["view"]["sections"][0]["fields"][0]["selected"], true);

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "select", "section": ACCOUNT, "field": "Email"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"]["outcome"], "swapped");
    assert_eq!(json["message"], "Swapped Account Information/Name and Account Information/Email");
    assert_eq!(field_ids(&json["view"], 0), ["Email", "Phone", "Name"]);
    assert!(json["view"]["selection"].is_null());

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "hide", "section": ACCOUNT, "field": "Phone"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["view"]["sections"][0]["fields"][1]["visible"], false);

    let (status, json) = send(&app, "POST", &format!("/api/sessions/{id}/reset"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(field_ids(&json, 0), ["Name", "Phone", "Email"]);
    assert_eq!(json["modified"], false);
}

#[tokio::test]
async fn test_action_errors_map_to_status() {
    let (app, _temp_dir) = create_test_app();
    let id = create_session(&app).await;

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "select", "section": ACCOUNT, "field": "Missing"}),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["details"], "not_found");

    let (status, json) = act(
        &app,
        &id,
        json!({
            "action": "swap",
            "first": {"section": ACCOUNT, "field": "Name"},
            "second": {"section": "Customer Success", "field": "sentiment"}
        }),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["details"], "invalid_operation");

    // Nothing moved
    let (_, view) = send(&app, "GET", &format!("/api/sessions/{id}"), None).await;
    assert_eq!(field_ids(&view, 0), ["Name", "Phone", "Email"]);
    assert_eq!(view["modified"], false);
}

#[tokio::test]
async fn test_move_and_reorder_actions() {
    let (app, _temp_dir) = create_test_app();
    let id = create_session(&app).await;

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "move", "section": ACCOUNT, "field": "Email", "to_index": 0}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"]["outcome"], "moved");
    assert_eq!(json["message"], "Moved Account Information/Email to position 1");
    assert_eq!(field_ids(&json["view"], 0), ["Email", "Name", "Phone"]);

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "move", "section": ACCOUNT, "field": "Email", "to_index": 3}),
    )
    .await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["details"], "invalid_operation");

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "reorder", "section": ACCOUNT, "fields": ["Phone", "Email", "Name"]}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"]["outcome"], "reordered");
    assert_eq!(field_ids(&json["view"], 0), ["Phone", "Email", "Name"]);
}

#[tokio::test]
async fn test_sessions_are_isolated() {
    let (app, _temp_dir) = create_test_app();
    let first = create_session(&app).await;
    let second = create_session(&app).await;

    act(
        &app,
        &first,
        json!({"action": "select", "section": ACCOUNT, "field": "Phone"}),
    )
    .await;
    act(
        &app,
        &first,
        json!({"action": "hide", "section": ACCOUNT, "field": "Email"}),
    )
    .await;

    let (_, view) = send(&app, "GET", &format!("/api/sessions/{second}"), None).await;
    assert!(view["selection"].is_null());
    assert_eq!(view["hidden_count"], 1);
    assert_eq!(view["sections"][0]["fields"][2]["visible"], true);
}

// ============================================================================
// Hidden Panel & Export Tests
// ============================================================================

#[tokio::test]
async fn test_hidden_fields_and_show() {
    let (app, _temp_dir) = create_test_app();
    let id = create_session(&app).await;

    act(
        &app,
        &id,
        json!({"action": "hide", "section": ACCOUNT, "field": "Email"}),
    )
    .await;

    let (status, json) = send(&app, "GET", &format!("/api/sessions/{id}/hidden"), None).await;
    assert_eq!(status, StatusCode::OK);
    let fields = json["fields"].as_array().unwrap();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0]["section"], ACCOUNT);
    assert_eq!(fields[0]["id"], "Email");
    assert_eq!(fields[1]["id"], "risk_reason");

    let (status, json) = act(
        &app,
        &id,
        json!({"action": "show", "section": ACCOUNT, "field": "Email"}),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["outcome"]["changed"], true);
    assert_eq!(json["view"]["sections"][0]["fields"][2]["visible"], true);
}

#[tokio::test]
async fn test_export_endpoint() {
    let (app, _temp_dir) = create_test_app();
    let id = create_session(&app).await;

    act(
        &app,
        &id,
        json!({"action": "toggle_section", "section": ACCOUNT}),
    )
    .await;

    let (status, json) = send(&app, "GET", &format!("/api/sessions/{id}/export"), None).await;

    assert_eq!(status, StatusCode::OK);
    let filename = json["suggested_filename"].as_str().unwrap();
    assert!(filename.starts_with("layout_export_"));
    assert!(filename.ends_with(".json"));

    let section = &json["document"]["sections"][0];
    assert!(section.get("expanded").is_none());
    assert_eq!(
        section["fields"][0],
        json!({"id": "Name", "label": "Name", "visible": true})
    );
}
