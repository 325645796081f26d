//! End-to-end tests for the HTTP surface: the login endpoint always answers
//! 200 with a classified body for authentication outcomes, and only a
//! missing payload is a transport-level error.

use axum::{
    body::Body,
    http::{header::CONTENT_TYPE, Request, StatusCode},
    Router,
};
use entrata::auth::{AuthConfig, Authenticator, CredentialStore, Hasher, SeedCredential};
use entrata::entrata::router;
use http_body_util::BodyExt;
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

// bcrypt minimum, tests only
const TEST_COST: u32 = 4;

fn app(mask_unknown_user: bool) -> Router {
    let hasher = Hasher::new(TEST_COST);
    let seeds = vec![
        SeedCredential::new("admin", "password123"),
        SeedCredential::new("angie", "angie123"),
    ];
    let store = CredentialStore::seed(&hasher, &seeds).expect("seed credential store");
    let config = AuthConfig::new()
        .with_cost(TEST_COST)
        .with_mask_unknown_user(mask_unknown_user);

    router(Arc::new(Authenticator::new(store, config)))
}

async fn post_login(app: Router, payload: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(payload.to_string()))
        .expect("build request");

    let response = app.oneshot(request).await.expect("send request");
    let status = response.status();
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body = serde_json::from_slice(&bytes).expect("json body");

    (status, body)
}

#[tokio::test]
async fn login_success() {
    let payload = json!({ "username": "admin", "password": "password123" });
    let (status, body) = post_login(app(false), &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "authenticated");
    assert_eq!(body["username"], "admin");
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn login_wrong_password_still_answers_200() {
    let payload = json!({ "username": "admin", "password": "wrong" });
    let (status, body) = post_login(app(false), &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "incorrect password");
    assert_eq!(body["username"], "admin");
}

#[tokio::test]
async fn login_unknown_user() {
    let payload = json!({ "username": "nouser", "password": "anything" });
    let (status, body) = post_login(app(false), &payload).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], false);
    assert_eq!(body["message"], "user not found");
    assert_eq!(body["username"], "nouser");
}

#[tokio::test]
async fn login_empty_credentials() {
    for payload in [
        json!({ "username": "", "password": "x" }),
        json!({ "username": "x", "password": "" }),
        json!({ "username": "   ", "password": "x" }),
    ] {
        let (status, body) = post_login(app(false), &payload).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], false);
        assert_eq!(body["message"], "credentials required");
        assert!(body["username"].is_null());
    }
}

#[tokio::test]
async fn login_username_trimmed_before_lookup() {
    let payload = json!({ "username": "  admin  ", "password": "password123" });
    let (_, body) = post_login(app(false), &payload).await;

    assert_eq!(body["success"], true);
    assert_eq!(body["username"], "admin");
}

#[tokio::test]
async fn login_masked_failures_are_uniform() {
    let unknown = json!({ "username": "nouser", "password": "anything" });
    let mismatch = json!({ "username": "admin", "password": "wrong" });

    let (_, unknown_body) = post_login(app(true), &unknown).await;
    let (_, mismatch_body) = post_login(app(true), &mismatch).await;

    assert_eq!(unknown_body["success"], false);
    assert_eq!(mismatch_body["success"], false);
    assert_eq!(unknown_body["message"], mismatch_body["message"]);
}

#[tokio::test]
async fn login_missing_payload_is_bad_request() {
    let request = Request::builder()
        .method("POST")
        .uri("/login")
        .body(Body::empty())
        .expect("build request");

    let response = app(false).oneshot(request).await.expect("send request");

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn status_reports_seeded_users() {
    let request = Request::builder()
        .uri("/status")
        .body(Body::empty())
        .expect("build request");

    let response = app(false).oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json body");

    assert_eq!(body["status"], "OK");
    assert_eq!(body["users"], 2);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn health_sets_app_header() {
    let request = Request::builder()
        .uri("/health")
        .body(Body::empty())
        .expect("build request");

    let response = app(false).oneshot(request).await.expect("send request");

    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key("X-App"));
}

#[tokio::test]
async fn openapi_document_is_served() {
    let request = Request::builder()
        .uri("/openapi.json")
        .body(Body::empty())
        .expect("build request");

    let response = app(false).oneshot(request).await.expect("send request");
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("read body")
        .to_bytes();
    let body: Value = serde_json::from_slice(&bytes).expect("json body");

    assert!(body["paths"]["/login"]["post"].is_object());
}
