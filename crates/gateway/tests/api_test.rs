//! HTTP tests for the gateway router.
//!
//! The router is driven in-process with `oneshot` against the in-memory
//! account store, so no database is required.

use std::sync::Arc;

use async_trait::async_trait;
use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;
use uuid::Uuid;

use account_service_lib::repository::{AccountRepository, InMemoryAccountStore};
use account_service_lib::AccountServices;
use common::{AppError, AppResult};
use domain::UserAccount;
use gateway_lib::routes::create_router;
use gateway_lib::state::AppState;

// =============================================================================
// Test Helpers
// =============================================================================

fn app_with(store: Arc<dyn AccountRepository>) -> Router {
    create_router(AppState::new(AccountServices::with_repository(store)))
}

fn app() -> Router {
    app_with(Arc::new(InMemoryAccountStore::new()))
}

fn register_request(body: Value) -> Request<Body> {
    Request::builder()
        .method(Method::POST)
        .uri("/auth/register")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn body_json(response: axum::response::Response) -> Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn valid_registration(email: &str) -> Value {
    json!({
        "fullName": "Ada Lovelace",
        "email": email,
        "password": "analytical-engine"
    })
}

/// Store that fails every call, standing in for an unreachable database.
struct UnavailableStore;

#[async_trait]
impl AccountRepository for UnavailableStore {
    async fn save(&self, _account: UserAccount) -> AppResult<UserAccount> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_email(&self, _email: &str) -> AppResult<Option<UserAccount>> {
        Err(AppError::internal("connection refused"))
    }

    async fn exists_by_email(&self, _email: &str) -> AppResult<bool> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_id(&self, _user_id: Uuid) -> AppResult<Option<UserAccount>> {
        Err(AppError::internal("connection refused"))
    }
}

// =============================================================================
// Registration
// =============================================================================

#[tokio::test]
async fn test_register_returns_created_with_location() {
    let response = app()
        .oneshot(register_request(valid_registration("ada@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::CREATED);

    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();
    let body = body_json(response).await;
    let user_id = body["userId"].as_str().unwrap();

    assert!(Uuid::parse_str(user_id).is_ok());
    assert_eq!(location, format!("/api/users/{}", user_id));
}

#[tokio::test]
async fn test_registered_account_can_be_fetched() {
    let app = app();

    let response = app
        .clone()
        .oneshot(register_request(valid_registration("ada@example.com")))
        .await
        .unwrap();
    let location = response
        .headers()
        .get(header::LOCATION)
        .unwrap()
        .to_str()
        .unwrap()
        .to_string();

    let response = app.oneshot(get_request(&location)).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["fullName"], "Ada Lovelace");
    assert_eq!(body["email"], "ada@example.com");
    assert_eq!(body["roles"], json!(["ROLE_CUSTOMER"]));
    assert_eq!(body["isAdmin"], false);
    assert_eq!(body["isStaff"], false);
    assert!(body.get("passwordHash").is_none());
}

#[tokio::test]
async fn test_register_duplicate_email_conflicts() {
    let app = app();

    let first = app
        .clone()
        .oneshot(register_request(valid_registration("ada@example.com")))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);

    let second = app
        .oneshot(register_request(valid_registration("ada@example.com")))
        .await
        .unwrap();

    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = body_json(second).await;
    assert_eq!(body["error"]["code"], "CONFLICT");
    assert_eq!(body["error"]["message"], "Email already registered");
}

#[tokio::test]
async fn test_register_short_password_is_rejected() {
    let response = app()
        .oneshot(register_request(json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "short"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(
        body["error"]["message"],
        "Password must be at least 8 characters long"
    );
}

#[tokio::test]
async fn test_register_whitespace_password_is_rejected() {
    let store = Arc::new(InMemoryAccountStore::new());
    let response = app_with(store.clone())
        .oneshot(register_request(json!({
            "fullName": "Ada Lovelace",
            "email": "ada@example.com",
            "password": "        "
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    assert_eq!(body["error"]["message"], "Password cannot be blank");
    assert!(store.is_empty().await);
}

#[tokio::test]
async fn test_register_bad_email_uses_client_message() {
    let response = app()
        .oneshot(register_request(valid_registration("not-an-email")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Email must be a valid format");
}

#[tokio::test]
async fn test_register_blank_name_is_rejected() {
    let response = app()
        .oneshot(register_request(json!({
            "fullName": "   ",
            "email": "ada@example.com",
            "password": "analytical-engine"
        })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["message"], "Full name cannot be blank");
}

#[tokio::test]
async fn test_register_malformed_email_is_rejected() {
    for email in ["not-an-email", "user@localhost"] {
        let response = app()
            .oneshot(register_request(valid_registration(email)))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "email: {}", email);
        let body = body_json(response).await;
        assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn test_register_missing_field_is_rejected() {
    let response = app()
        .oneshot(register_request(json!({ "email": "ada@example.com" })))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_register_storage_failure_hides_details() {
    let response = app_with(Arc::new(UnavailableStore))
        .oneshot(register_request(valid_registration("ada@example.com")))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "INTERNAL_ERROR");
    assert!(!body["error"]["message"]
        .as_str()
        .unwrap()
        .contains("connection refused"));
}

// =============================================================================
// Account lookup
// =============================================================================

#[tokio::test]
async fn test_unknown_account_is_not_found() {
    let response = app()
        .oneshot(get_request(&format!("/api/users/{}", Uuid::new_v4())))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await;
    assert_eq!(body["error"]["code"], "NOT_FOUND");
}

#[tokio::test]
async fn test_malformed_account_id_is_bad_request() {
    let response = app().oneshot(get_request("/api/users/not-a-uuid")).await.unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

// =============================================================================
// Health and docs
// =============================================================================

#[tokio::test]
async fn test_health_reports_healthy_in_memory() {
    let response = app().oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["services"]["storage"]["status"], "healthy");
}

#[tokio::test]
async fn test_openapi_document_is_served() {
    let response = app()
        .oneshot(get_request("/api-docs/openapi.json"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert!(body["paths"].get("/auth/register").is_some());
}
