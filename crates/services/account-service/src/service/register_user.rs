//! Account registration use case.
//!
//! Validates the email, rejects duplicates, hashes the password and persists
//! a new customer account. Each step fails fast; nothing durable happens
//! unless every earlier step succeeded.

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use common::{AppError, AppResult};
use domain::{Email, PasswordHasher, RoleCode, RoleSet, UserAccount};

use crate::repository::AccountRepository;

/// Input for a registration.
#[derive(Clone)]
pub struct RegisterUserCommand {
    pub full_name: String,
    pub email: String,
    pub raw_password: String,
}

// Never print the raw password
impl std::fmt::Debug for RegisterUserCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RegisterUserCommand")
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("raw_password", &"[REDACTED]")
            .finish()
    }
}

/// Registration entry point for transport layers.
#[async_trait]
pub trait AccountRegistration: Send + Sync {
    /// Register a new account and return its identifier
    async fn execute(&self, command: RegisterUserCommand) -> AppResult<Uuid>;
}

/// Concrete registration workflow over a repository and a hasher.
pub struct RegisterUserUseCase {
    accounts: Arc<dyn AccountRepository>,
    hasher: Arc<dyn PasswordHasher>,
}

impl RegisterUserUseCase {
    pub fn new(accounts: Arc<dyn AccountRepository>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { accounts, hasher }
    }
}

#[async_trait]
impl AccountRegistration for RegisterUserUseCase {
    async fn execute(&self, command: RegisterUserCommand) -> AppResult<Uuid> {
        let RegisterUserCommand {
            full_name,
            email,
            raw_password,
        } = command;

        let email = Email::of(email)?;

        // Fast path only; the store's unique constraint is authoritative
        if self.accounts.exists_by_email(email.value()).await? {
            tracing::warn!("Registration rejected: email already registered");
            return Err(AppError::conflict("Email"));
        }

        // Argon2 is CPU-bound; keep it off the async workers
        let hasher = self.hasher.clone();
        let password_hash = tokio::task::spawn_blocking(move || hasher.encode(&raw_password))
            .await
            .map_err(|e| AppError::internal(format!("Password hashing task failed: {}", e)))??;
        if password_hash.is_empty() {
            return Err(AppError::internal("Password hasher returned an empty hash"));
        }

        let account = UserAccount::new(
            Uuid::new_v4(),
            full_name,
            email,
            password_hash,
            RoleSet::from([RoleCode::Customer]),
        );

        let saved = self.accounts.save(account).await?;
        tracing::info!(user_id = %saved.user_id(), "Account registered");

        Ok(saved.user_id())
    }
}
