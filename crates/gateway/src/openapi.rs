//! OpenAPI documentation.

use utoipa::OpenApi;

use crate::handlers::auth_handler::{RegisterRequest, RegisterResponse};
use domain::{AccountResponse, RoleCode};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::auth_handler::register,
        crate::handlers::account_handler::get_account,
    ),
    components(
        schemas(
            RegisterRequest,
            RegisterResponse,
            AccountResponse,
            RoleCode,
        )
    ),
    tags(
        (name = "Authentication", description = "Account registration endpoints"),
        (name = "Accounts", description = "Account lookup endpoints"),
    )
)]
pub struct ApiDoc;
