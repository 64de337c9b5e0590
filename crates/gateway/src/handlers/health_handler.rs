//! Health check handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;

use crate::state::AppState;

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub services: ServiceStatus,
}

/// Individual service status.
#[derive(Debug, Serialize)]
pub struct ServiceStatus {
    pub storage: ServiceHealth,
}

/// Service health with optional error message.
#[derive(Debug, Serialize)]
pub struct ServiceHealth {
    pub status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Create health routes.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// Health check endpoint - verifies account storage connectivity.
pub async fn health_check(State(state): State<AppState>) -> Response {
    let storage = storage_health(state.accounts.ping().await);
    let all_healthy = storage.status == "healthy";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" },
        services: ServiceStatus { storage },
    };

    if all_healthy {
        (StatusCode::OK, Json(response)).into_response()
    } else {
        (StatusCode::SERVICE_UNAVAILABLE, Json(response)).into_response()
    }
}

/// Driver errors may carry connection details; they stay in the logs.
fn storage_health<E: std::fmt::Display>(ping: Result<(), E>) -> ServiceHealth {
    match ping {
        Ok(()) => ServiceHealth {
            status: "healthy",
            error: None,
        },
        Err(e) => {
            tracing::error!("Storage health check failed: {}", e);
            ServiceHealth {
                status: "unhealthy",
                error: Some("Storage unreachable".to_string()),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reachable_storage_is_healthy() {
        let health = storage_health::<String>(Ok(()));

        assert_eq!(health.status, "healthy");
        assert!(health.error.is_none());
    }

    #[test]
    fn test_storage_failure_detail_is_not_exposed() {
        let health = storage_health(Err(
            "error connecting to postgres://seatsync:hunter2@db:5432/seatsync",
        ));

        assert_eq!(health.status, "unhealthy");
        let error = health.error.unwrap();
        assert_eq!(error, "Storage unreachable");
        assert!(!error.contains("hunter2"));
    }
}
