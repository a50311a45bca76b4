//! Integration tests for the authentication endpoints.
//!
//! These drive the real router with the in-memory user store and the
//! HS256 signer, so the full register -> login -> refresh flow runs
//! without external infrastructure.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use auth_rest_api::api::create_router;
use auth_rest_api::config::{Config, JwtConfig};
use auth_rest_api::services::{JwtSigner, TokenSigner};
use auth_rest_api::AppState;

const TEST_SECRET: &str = "test-secret-key-for-testing-only-32chars";
const ACCESS_EXP_SECS: i64 = 3600;
const REFRESH_EXP_SECS: i64 = 604_800;

// =============================================================================
// Test Helpers
// =============================================================================

fn test_config() -> Config {
    Config {
        jwt: JwtConfig::new(TEST_SECRET.to_string(), ACCESS_EXP_SECS, REFRESH_EXP_SECS),
        server_host: "127.0.0.1".to_string(),
        server_port: 0,
    }
}

/// Router clones share the same Arc'd state, so registrations persist
/// across requests within a test.
fn test_app() -> Router {
    create_router(AppState::from_config(test_config()))
}

async fn send(
    app: &Router,
    method: Method,
    uri: &str,
    body: Option<Value>,
    bearer: Option<&str>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    if body.is_some() {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
    }
    if let Some(token) = bearer {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }

    let request = builder
        .body(match body {
            Some(value) => Body::from(value.to_string()),
            None => Body::empty(),
        })
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

fn alice_input() -> Value {
    json!({
        "name": "Alice Doe",
        "username": "alice",
        "password": "SecurePass123!",
        "roles": ["USER"]
    })
}

async fn register_alice(app: &Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/register",
        Some(alice_input()),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body
}

async fn login_alice(app: &Router) -> Value {
    let (status, body) = send(
        app,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": "alice", "password": "SecurePass123!" })),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    body
}

/// Decode a token with the test secret and return its raw claims.
fn decode_claims(token: &str) -> Value {
    decode::<Value>(
        token,
        &DecodingKey::from_secret(TEST_SECRET.as_bytes()),
        &Validation::default(),
    )
    .unwrap()
    .claims
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn register_returns_created_user() {
    let app = test_app();
    let body = register_alice(&app).await;

    assert_eq!(body["name"], "Alice Doe");
    assert_eq!(body["username"], "alice");
    assert_eq!(body["roles"], json!(["USER"]));
    assert!(body["id"].as_str().unwrap().parse::<Uuid>().is_ok());
    assert!(body.get("password").is_none());
    assert!(body.get("password_hash").is_none());
}

#[tokio::test]
async fn register_duplicate_username_conflicts() {
    let app = test_app();
    register_alice(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/register",
        Some(alice_input()),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["error"]["code"], "CONFLICT");
}

#[tokio::test]
async fn register_empty_name_rejected() {
    let app = test_app();
    let mut input = alice_input();
    input["name"] = json!("");

    let (status, body) = send(&app, Method::POST, "/auth/register", Some(input), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_empty_password_rejected() {
    let app = test_app();
    let mut input = alice_input();
    input["password"] = json!("");

    let (status, body) = send(&app, Method::POST, "/auth/register", Some(input), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn register_empty_username_accepted() {
    // Pins the presence-only username check: empty strings pass.
    let app = test_app();
    let mut input = alice_input();
    input["username"] = json!("");

    let (status, body) = send(&app, Method::POST, "/auth/register", Some(input), None).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "");
}

#[tokio::test]
async fn register_unknown_role_rejected_by_deserialization() {
    let app = test_app();
    let mut input = alice_input();
    input["roles"] = json!(["WIZARD"]);

    let (status, body) = send(&app, Method::POST, "/auth/register", Some(input), None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn login_issues_distinct_tokens_with_configured_expiries() {
    let app = test_app();
    let registered = register_alice(&app).await;
    let tokens = login_alice(&app).await;

    let access_token = tokens["access_token"].as_str().unwrap();
    let refresh_token = tokens["refresh_token"].as_str().unwrap();
    assert_ne!(access_token, refresh_token);

    let access = decode_claims(access_token);
    assert_eq!(access["sub"], registered["id"]);
    assert_eq!(access["username"], "alice");
    assert_eq!(access["roles"], json!(["USER"]));
    assert_eq!(
        access["exp"].as_i64().unwrap() - access["iat"].as_i64().unwrap(),
        ACCESS_EXP_SECS
    );

    let refresh = decode_claims(refresh_token);
    assert_eq!(refresh["sub"], registered["id"]);
    assert!(refresh.get("username").is_none());
    assert!(refresh.get("roles").is_none());
    assert_eq!(
        refresh["exp"].as_i64().unwrap() - refresh["iat"].as_i64().unwrap(),
        REFRESH_EXP_SECS
    );
}

#[tokio::test]
async fn login_wrong_password_unauthorized() {
    let app = test_app();
    register_alice(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": "alice", "password": "nope" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn login_unknown_user_unauthorized() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": "nobody", "password": "whatever" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "INVALID_CREDENTIALS");
}

#[tokio::test]
async fn login_empty_fields_fail_validation_before_auth() {
    let app = test_app();

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/login",
        Some(json!({ "username": "", "password": "" })),
        None,
    )
    .await;

    // Schema rejection, not a credentials failure.
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

// =============================================================================
// Token refresh
// =============================================================================

#[tokio::test]
async fn refresh_returns_new_valid_pair() {
    let app = test_app();
    let registered = register_alice(&app).await;
    let tokens = login_alice(&app).await;

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/refresh-token",
        Some(json!({ "refresh_token": tokens["refresh_token"] })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    let access = decode_claims(body["access_token"].as_str().unwrap());
    assert_eq!(access["sub"], registered["id"]);
    assert_eq!(access["roles"], json!(["USER"]));

    let refresh = decode_claims(body["refresh_token"].as_str().unwrap());
    assert_eq!(refresh["sub"], registered["id"]);
}

#[tokio::test]
async fn refresh_with_garbage_token_unauthorized() {
    let app = test_app();

    let (status, _) = send(
        &app,
        Method::POST,
        "/auth/refresh-token",
        Some(json!({ "refresh_token": "not-a-jwt" })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn refresh_for_unknown_subject_unauthorized() {
    let app = test_app();

    // Correctly signed refresh token whose subject was never registered.
    let signer = JwtSigner::new(test_config().jwt);
    let orphaned = signer
        .sign(json!({ "sub": Uuid::new_v4() }), REFRESH_EXP_SECS)
        .unwrap();

    let (status, body) = send(
        &app,
        Method::POST,
        "/auth/refresh-token",
        Some(json!({ "refresh_token": orphaned })),
        None,
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"]["code"], "UNAUTHORIZED");
}

// =============================================================================
// Authenticated endpoint
// =============================================================================

#[tokio::test]
async fn me_returns_fresh_identity_for_valid_token() {
    let app = test_app();
    let registered = register_alice(&app).await;
    let tokens = login_alice(&app).await;

    let (status, body) = send(
        &app,
        Method::GET,
        "/auth/me",
        None,
        Some(tokens["access_token"].as_str().unwrap()),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], registered["id"]);
    assert_eq!(body["username"], "alice");
    assert_eq!(body["roles"], json!(["USER"]));
}

#[tokio::test]
async fn me_without_token_unauthorized() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/auth/me", None, None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn me_with_malformed_bearer_unauthorized() {
    let app = test_app();

    let (status, _) = send(&app, Method::GET, "/auth/me", None, Some("not-a-jwt")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn health_endpoint_reports_healthy() {
    let app = test_app();

    let (status, body) = send(&app, Method::GET, "/health", None, None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
}
