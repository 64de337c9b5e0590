//! Account lookup handlers.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use uuid::Uuid;

use account_service_lib::repository::AccountRepository;
use common::{AppResult, OptionExt};
use domain::AccountResponse;

use crate::state::AppState;

/// Create account routes
pub fn account_routes() -> Router<AppState> {
    Router::new().route("/:id", get(get_account))
}

/// Get an account by identifier
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "Accounts",
    params(("id" = Uuid, Path, description = "Account identifier")),
    responses(
        (status = 200, description = "Account found", body = AccountResponse),
        (status = 404, description = "Account not found")
    )
)]
pub async fn get_account(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> AppResult<Json<AccountResponse>> {
    let account = state.accounts.accounts.find_by_id(id).await?.ok_or_not_found()?;

    Ok(Json(AccountResponse::from(account)))
}
