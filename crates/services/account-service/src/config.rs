//! Account service configuration.

use std::env;
use std::str::FromStr;

use common::DatabaseConfig;

/// Backing store for accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// Relational store through SeaORM
    #[default]
    Postgres,
    /// Process-local store for development and tests
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "postgres" | "database" | "db" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            other => Err(format!("unknown storage backend: {}", other)),
        }
    }
}

/// Account service configuration.
#[derive(Debug, Clone, Default)]
pub struct AccountServiceConfig {
    /// Database connection settings
    pub database: DatabaseConfig,
    /// Which repository implementation to use
    pub storage: StorageBackend,
}

impl AccountServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = DatabaseConfig::default();

        let storage = match env::var("ACCOUNT_STORAGE") {
            Ok(value) => value.parse().unwrap_or_else(|e| {
                tracing::warn!("{}, falling back to postgres", e);
                StorageBackend::Postgres
            }),
            Err(_) => StorageBackend::Postgres,
        };

        Self {
            database: DatabaseConfig {
                url: env::var("ACCOUNT_SERVICE_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.min_connections),
            },
            storage,
        }
    }

    /// In-memory configuration, no database required.
    pub fn in_memory() -> Self {
        Self {
            storage: StorageBackend::Memory,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_parsing() {
        assert_eq!("memory".parse::<StorageBackend>(), Ok(StorageBackend::Memory));
        assert_eq!("Postgres".parse::<StorageBackend>(), Ok(StorageBackend::Postgres));
        assert!("mongo".parse::<StorageBackend>().is_err());
    }

    #[test]
    fn test_in_memory_config() {
        let config = AccountServiceConfig::in_memory();

        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.database.max_connections, 10);
    }
}
