//! Account Service Library
//!
//! This crate provides account registration over a pluggable repository.
//! It is embedded by the gateway binary, which owns the transport.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::sync::Arc;

use domain::Argon2Hasher;
use sea_orm::DbErr;
use tracing::info;

use crate::config::{AccountServiceConfig, StorageBackend};
use crate::infra::Database;
use crate::repository::{AccountRepository, AccountStore, InMemoryAccountStore};
use crate::service::{AccountRegistration, RegisterUserUseCase};

/// Wired account services, ready to hand to a transport layer.
#[derive(Clone)]
pub struct AccountServices {
    pub accounts: Arc<dyn AccountRepository>,
    pub registration: Arc<dyn AccountRegistration>,
    database: Option<Database>,
}

impl AccountServices {
    /// Wire the use case over an existing repository.
    pub fn with_repository(accounts: Arc<dyn AccountRepository>) -> Self {
        let registration = Arc::new(RegisterUserUseCase::new(
            accounts.clone(),
            Arc::new(Argon2Hasher::new()),
        ));

        Self {
            accounts,
            registration,
            database: None,
        }
    }

    /// Check storage connectivity. Always healthy without a database.
    pub async fn ping(&self) -> Result<(), DbErr> {
        match &self.database {
            Some(db) => db.ping().await,
            None => Ok(()),
        }
    }
}

/// Build the account services described by `config`.
///
/// The relational backend connects and applies pending migrations first.
pub async fn bootstrap(config: &AccountServiceConfig) -> Result<AccountServices, DbErr> {
    match config.storage {
        StorageBackend::Postgres => {
            let db = Database::connect(&config.database).await?;
            let store = Arc::new(AccountStore::new(db.get_connection()));

            let mut services = AccountServices::with_repository(store);
            services.database = Some(db);
            Ok(services)
        }
        StorageBackend::Memory => {
            info!("Using in-memory account storage");
            Ok(AccountServices::with_repository(Arc::new(
                InMemoryAccountStore::new(),
            )))
        }
    }
}

/// Run migrations (for CLI commands).
pub async fn run_migrations(
    config: &AccountServiceConfig,
    action: MigrateAction,
) -> Result<(), DbErr> {
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}
