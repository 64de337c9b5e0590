//! UserAccount domain entity and related types.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::email::Email;
use crate::role::{self, RoleCode, RoleSet};

/// Registered account. Immutable once built; a change means a new value.
#[derive(Clone, PartialEq, Eq)]
pub struct UserAccount {
    user_id: Uuid,
    full_name: String,
    email: Email,
    password_hash: String,
    roles: RoleSet,
}

// Don't expose hash in debug output (security)
impl std::fmt::Debug for UserAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UserAccount")
            .field("user_id", &self.user_id)
            .field("full_name", &self.full_name)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("roles", &self.roles)
            .finish()
    }
}

impl UserAccount {
    /// Assemble an account from already-validated parts.
    ///
    /// No role defaulting happens here; callers decide the initial set.
    pub fn new(
        user_id: Uuid,
        full_name: String,
        email: Email,
        password_hash: String,
        roles: RoleSet,
    ) -> Self {
        Self {
            user_id,
            full_name,
            email,
            password_hash,
            roles,
        }
    }

    pub fn user_id(&self) -> Uuid {
        self.user_id
    }

    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }

    pub fn roles(&self) -> &RoleSet {
        &self.roles
    }

    /// Check if account holds the admin role
    pub fn is_admin(&self) -> bool {
        role::is_admin(&self.roles)
    }

    /// Check if account has staff capability (staff or admin)
    pub fn is_staff(&self) -> bool {
        role::is_staff(&self.roles)
    }
}

/// Account view (safe to return to client)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
#[serde(rename_all = "camelCase")]
pub struct AccountResponse {
    /// Unique account identifier
    pub user_id: Uuid,
    /// Account holder's full name
    pub full_name: String,
    /// Account email address
    pub email: String,
    /// Granted role codes
    pub roles: Vec<RoleCode>,
    /// Derived administrator capability
    pub is_admin: bool,
    /// Derived staff capability
    pub is_staff: bool,
}

impl From<&UserAccount> for AccountResponse {
    fn from(account: &UserAccount) -> Self {
        Self {
            user_id: account.user_id,
            full_name: account.full_name.clone(),
            email: account.email.value().to_string(),
            roles: account.roles.iter().copied().collect(),
            is_admin: account.is_admin(),
            is_staff: account.is_staff(),
        }
    }
}

impl From<UserAccount> for AccountResponse {
    fn from(account: UserAccount) -> Self {
        Self::from(&account)
    }
}
