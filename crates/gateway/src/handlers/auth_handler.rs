//! Registration handlers.

use axum::{
    extract::State,
    http::{header, StatusCode},
    response::Json,
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use account_service_lib::service::{AccountRegistration, RegisterUserCommand};
use common::{AppError, AppResult};

use crate::extractors::ValidatedJson;
use crate::state::AppState;

/// Account registration request
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    /// Account holder's full name
    #[validate(length(min = 1, message = "Full name cannot be blank"))]
    #[schema(example = "Ada Lovelace")]
    pub full_name: String,
    /// Email address used to sign in
    #[validate(email(message = "Email must be a valid format"))]
    #[schema(example = "ada@example.com")]
    pub email: String,
    /// Password (minimum 8 characters)
    #[validate(length(min = 8, message = "Password must be at least 8 characters long"))]
    #[schema(example = "SecurePass123!", min_length = 8)]
    pub password: String,
}

impl RegisterRequest {
    fn into_command(self) -> AppResult<RegisterUserCommand> {
        // `length` accepts whitespace-only values
        if self.full_name.trim().is_empty() {
            return Err(AppError::validation("Full name cannot be blank"));
        }
        if self.password.trim().is_empty() {
            return Err(AppError::validation("Password cannot be blank"));
        }

        Ok(RegisterUserCommand {
            full_name: self.full_name,
            email: self.email,
            raw_password: self.password,
        })
    }
}

/// Identifier of a newly registered account
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct RegisterResponse {
    pub user_id: Uuid,
}

/// Create registration routes
pub fn auth_routes() -> Router<AppState> {
    Router::new().route("/register", post(register))
}

/// Register a new customer account
#[utoipa::path(
    post,
    path = "/auth/register",
    tag = "Authentication",
    request_body = RegisterRequest,
    responses(
        (status = 201, description = "Account registered", body = RegisterResponse,
            headers(("Location" = String, description = "URL of the new account"))),
        (status = 400, description = "Validation error"),
        (status = 409, description = "Email already registered")
    )
)]
pub async fn register(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> AppResult<(StatusCode, [(header::HeaderName, String); 1], Json<RegisterResponse>)> {
    let user_id = state
        .accounts
        .registration
        .execute(payload.into_command()?)
        .await?;

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, format!("/api/users/{}", user_id))],
        Json(RegisterResponse { user_id }),
    ))
}
