//! Domain layer - Accounts, roles and the rules attached to them.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Persistence and transport crates build on the types exported here.

pub mod constants;
pub mod email;
pub mod error;
pub mod password;
pub mod role;
pub mod user_account;

pub use constants::*;
pub use email::Email;
pub use error::{DomainError, DomainResult};
pub use password::{Argon2Hasher, PasswordHasher};
pub use role::{is_admin, is_staff, RoleCode, RoleSet};
pub use user_account::{AccountResponse, UserAccount};

#[cfg(any(test, feature = "test-utils"))]
pub use password::MockPasswordHasher;
