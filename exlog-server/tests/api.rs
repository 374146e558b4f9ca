//! End-to-end router tests against the in-memory store

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use exlog_server::models::ExerciseDate;
use exlog_server::{build_router, AppState, MemoryStore};
use serde_json::{json, Value};
use tower::ServiceExt;

fn app() -> Router {
    build_router(AppState::new(Arc::new(MemoryStore::new())))
}

async fn send(app: &Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

async fn post_json(app: &Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, req).await
}

async fn post_form(app: &Router, uri: &str, body: &'static str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from(body))
        .unwrap();
    send(app, req).await
}

async fn get(app: &Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder().uri(uri).body(Body::empty()).unwrap();
    send(app, req).await
}

async fn create_user(app: &Router, username: &str) -> String {
    let (status, body) = post_json(app, "/api/users", json!({ "username": username })).await;
    assert_eq!(status, StatusCode::OK);
    body["id"].as_str().unwrap().to_owned()
}

async fn log_exercise(app: &Router, id: &str, description: &str, date: &str) {
    let uri = format!("/api/users/{id}/exercises");
    let (status, _) = post_json(
        app,
        &uri,
        json!({ "description": description, "duration": 30, "date": date }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn create_user_returns_username_and_id() {
    let app = app();
    let (status, body) = post_json(&app, "/api/users", json!({ "username": "fcc_test" })).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "fcc_test");
    assert!(!body["id"].as_str().unwrap().is_empty());
}

#[tokio::test]
async fn create_user_from_form_post() {
    let app = app();
    let (status, body) = post_form(&app, "/api/users", "username=form_user").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "form_user");
}

#[tokio::test]
async fn create_user_rejects_missing_or_blank_username() {
    let app = app();

    let (status, body) = post_json(&app, "/api/users", json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "username is required");

    let (status, body) = post_json(&app, "/api/users", json!({ "username": "  " })).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "username cannot be empty");
}

#[tokio::test]
async fn duplicate_usernames_are_allowed() {
    let app = app();
    let a = create_user(&app, "same").await;
    let b = create_user(&app, "same").await;
    assert_ne!(a, b);
}

#[tokio::test]
async fn list_users_contains_created_users() {
    let app = app();
    let first = create_user(&app, "first").await;
    let second = create_user(&app, "second").await;

    let (status, body) = get(&app, "/api/users").await;
    assert_eq!(status, StatusCode::OK);

    let users = body.as_array().unwrap();
    assert_eq!(users.len(), 2);
    for user in users {
        assert!(user["id"].is_string());
        assert!(user["username"].is_string());
    }
    assert!(users.iter().any(|u| u["id"] == first && u["username"] == "first"));
    assert!(users.iter().any(|u| u["id"] == second && u["username"] == "second"));
}

#[tokio::test]
async fn create_exercise_reformats_date() {
    let app = app();
    let id = create_user(&app, "runner").await;

    let (status, body) = post_json(
        &app,
        &format!("/api/users/{id}/exercises"),
        json!({ "description": "test run", "duration": 30, "date": "2023-01-15" }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!({
            "username": "runner",
            "description": "test run",
            "duration": 30,
            "date": "Sun Jan 15 2023"
        })
    );
}

#[tokio::test]
async fn create_exercise_without_date_uses_today() {
    let app = app();
    let id = create_user(&app, "today").await;

    let before = ExerciseDate::today().to_string();
    let (status, body) = post_json(
        &app,
        &format!("/api/users/{id}/exercises"),
        json!({ "description": "walk", "duration": 10 }),
    )
    .await;
    let after = ExerciseDate::today().to_string();

    assert_eq!(status, StatusCode::OK);
    let date = body["date"].as_str().unwrap();
    assert!(date == before || date == after, "unexpected date {date}");
}

#[tokio::test]
async fn create_exercise_from_form_coerces_duration() {
    let app = app();
    let id = create_user(&app, "former").await;
    let uri = format!("/api/users/{id}/exercises");

    let req = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/x-www-form-urlencoded")
        .body(Body::from("description=swim&duration=45&date="))
        .unwrap();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 45);
    assert_eq!(body["date"], ExerciseDate::today().to_string());
}

#[tokio::test]
async fn create_exercise_validates_fields() {
    let app = app();
    let id = create_user(&app, "strict").await;
    let uri = format!("/api/users/{id}/exercises");

    for (payload, message) in [
        (json!({ "duration": 30 }), "description is required"),
        (json!({ "description": "x" }), "duration is required"),
        (
            json!({ "description": "x", "duration": "ten" }),
            "duration: must be a whole number of minutes",
        ),
        (
            json!({ "description": "x", "duration": -3 }),
            "duration: must be greater than zero",
        ),
        (
            json!({ "description": "x", "duration": 5, "date": "not-a-date" }),
            "invalid date value: 'not-a-date' is not a recognised date",
        ),
    ] {
        let (status, body) = post_json(&app, &uri, payload).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], message);
    }

    // Nothing was written
    let (_, body) = get(&app, &format!("/api/users/{id}/logs")).await;
    assert_eq!(body["count"], 0);
}

#[tokio::test]
async fn create_exercise_duration_must_be_whole_minutes() {
    let app = app();
    let id = create_user(&app, "decimal").await;
    let uri = format!("/api/users/{id}/exercises");

    let (status, body) = post_json(
        &app,
        &uri,
        json!({ "description": "x", "duration": 30.0, "date": "2023-01-15" }),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["duration"], 30);

    let (status, body) = post_json(
        &app,
        &uri,
        json!({ "description": "x", "duration": 12.5, "date": "2023-01-15" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "duration: must be a whole number of minutes");

    let (status, body) = post_json(
        &app,
        &uri,
        json!({ "description": "x", "duration": 1e20, "date": "2023-01-15" }),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "duration: is too large");

    let (_, body) = get(&app, &format!("/api/users/{id}/logs")).await;
    assert_eq!(body["count"], 1);
}

#[tokio::test]
async fn unknown_user_wins_over_invalid_fields() {
    let app = app();
    let (status, body) = post_json(
        &app,
        "/api/users/00000000-0000-4000-8000-000000000000/exercises",
        json!({ "duration": "ten" }),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");
}

#[tokio::test]
async fn malformed_json_body_is_bad_request() {
    let app = app();
    let req = Request::builder()
        .method("POST")
        .uri("/api/users")
        .header("content-type", "application/json")
        .body(Body::from("{\"username\":"))
        .unwrap();
    let (status, body) = send(&app, req).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "bad_request");
}

#[tokio::test]
async fn create_exercise_for_unknown_user_is_not_found() {
    let app = app();
    let ghost = "00000000-0000-4000-8000-000000000000";

    let (status, body) = post_json(
        &app,
        &format!("/api/users/{ghost}/exercises"),
        json!({ "description": "ghost run", "duration": 30 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "not_found");

    let (status, _) = post_json(
        &app,
        "/api/users/not-an-id/exercises",
        json!({ "description": "ghost run", "duration": 30 }),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn log_lists_all_exercises_in_stored_order() {
    let app = app();
    let id = create_user(&app, "logger").await;
    log_exercise(&app, &id, "second", "2023-01-20").await;
    log_exercise(&app, &id, "first", "2023-01-01").await;

    let (status, body) = get(&app, &format!("/api/users/{id}/logs")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["username"], "logger");
    assert_eq!(body["count"], 2);
    assert_eq!(
        body["log"],
        json!([
            { "description": "second", "duration": 30, "date": "Fri Jan 20 2023" },
            { "description": "first", "duration": 30, "date": "Sun Jan 01 2023" }
        ])
    );
}

#[tokio::test]
async fn log_filters_by_inclusive_date_range() {
    let app = app();
    let id = create_user(&app, "ranged").await;
    log_exercise(&app, &id, "jan 1", "2023-01-01").await;
    log_exercise(&app, &id, "jan 10", "2023-01-10").await;
    log_exercise(&app, &id, "jan 20", "2023-01-20").await;

    let (status, body) = get(
        &app,
        &format!("/api/users/{id}/logs?from=2023-01-05&to=2023-01-15"),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["log"][0]["description"], "jan 10");

    let (_, body) = get(&app, &format!("/api/users/{id}/logs?from=2023-01-10")).await;
    assert_eq!(body["count"], 2);

    let (_, body) = get(&app, &format!("/api/users/{id}/logs?to=2023-01-10")).await;
    assert_eq!(body["count"], 2);
}

#[tokio::test]
async fn log_limit_keeps_first_entries() {
    let app = app();
    let id = create_user(&app, "limited").await;
    log_exercise(&app, &id, "one", "2023-03-01").await;
    log_exercise(&app, &id, "two", "2023-02-01").await;
    log_exercise(&app, &id, "three", "2023-01-01").await;

    let (status, body) = get(&app, &format!("/api/users/{id}/logs?limit=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 1);
    assert_eq!(body["log"].as_array().unwrap().len(), 1);
    assert_eq!(body["log"][0]["description"], "one");

    let (_, body) = get(&app, &format!("/api/users/{id}/logs?limit=")).await;
    assert_eq!(body["count"], 3);
}

#[tokio::test]
async fn log_rejects_malformed_query() {
    let app = app();
    let id = create_user(&app, "picky").await;

    let (status, body) = get(&app, &format!("/api/users/{id}/logs?limit=abc")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "validation_error");

    let (status, _) = get(&app, &format!("/api/users/{id}/logs?from=someday")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn log_for_unknown_user_is_not_found() {
    let app = app();
    let (status, body) = get(&app, "/api/users/00000000-0000-4000-8000-000000000000/logs").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body["message"],
        "user '00000000-0000-4000-8000-000000000000' not found"
    );
}

#[tokio::test]
async fn logs_are_scoped_to_their_user() {
    let app = app();
    let alice = create_user(&app, "alice").await;
    let bob = create_user(&app, "bob").await;
    log_exercise(&app, &alice, "alice run", "2023-01-01").await;

    let (_, body) = get(&app, &format!("/api/users/{bob}/logs")).await;
    assert_eq!(body["username"], "bob");
    assert_eq!(body["count"], 0);
    assert_eq!(body["log"], json!([]));
}

#[tokio::test]
async fn health_reports_store_status() {
    let app = app();
    let (status, body) = get(&app, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["store"], "ok");
}
