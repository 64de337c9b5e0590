//! Application state for dependency injection.

use account_service_lib::AccountServices;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    pub accounts: AccountServices,
}

impl AppState {
    /// Create new app state.
    pub fn new(accounts: AccountServices) -> Self {
        Self { accounts }
    }
}
