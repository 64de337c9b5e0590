//! Gateway configuration.

use std::env;

use account_service_lib::config::AccountServiceConfig;
use common::ServiceConfig;

/// Gateway configuration.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// HTTP listener settings
    pub server: ServiceConfig,
    /// Embedded account service settings
    pub accounts: AccountServiceConfig,
}

impl GatewayConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = ServiceConfig::default();

        Self {
            server: ServiceConfig {
                service_name: "seatsync-gateway".to_string(),
                host: env::var("GATEWAY_HOST").unwrap_or(defaults.host),
                port: env::var("GATEWAY_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(defaults.port),
                log_level: env::var("RUST_LOG").unwrap_or(defaults.log_level),
            },
            accounts: AccountServiceConfig::from_env(),
        }
    }
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            server: ServiceConfig {
                service_name: "seatsync-gateway".to_string(),
                ..ServiceConfig::default()
            },
            accounts: AccountServiceConfig::default(),
        }
    }
}
