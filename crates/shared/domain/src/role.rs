//! Role codes and the capability checks derived from them.
//!
//! Roles are stored as a flat set. The hierarchy (an admin can do whatever
//! staff can) exists only in [`is_staff`], never in stored data.

use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{ROLE_ADMIN, ROLE_CUSTOMER, ROLE_STAFF};
use crate::error::DomainError;

/// Closed set of role codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub enum RoleCode {
    #[serde(rename = "ROLE_CUSTOMER")]
    Customer,
    #[serde(rename = "ROLE_STAFF")]
    Staff,
    #[serde(rename = "ROLE_ADMIN")]
    Admin,
}

/// Set of roles held by an account.
pub type RoleSet = BTreeSet<RoleCode>;

impl RoleCode {
    /// Every role code, in declaration order.
    pub const ALL: [RoleCode; 3] = [RoleCode::Customer, RoleCode::Staff, RoleCode::Admin];

    /// Canonical code name, as persisted.
    pub fn as_str(&self) -> &'static str {
        match self {
            RoleCode::Customer => ROLE_CUSTOMER,
            RoleCode::Staff => ROLE_STAFF,
            RoleCode::Admin => ROLE_ADMIN,
        }
    }
}

impl fmt::Display for RoleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RoleCode {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            ROLE_CUSTOMER => Ok(RoleCode::Customer),
            ROLE_STAFF => Ok(RoleCode::Staff),
            ROLE_ADMIN => Ok(RoleCode::Admin),
            other => Err(DomainError::validation(format!("Unknown role code: {}", other))),
        }
    }
}

impl From<RoleCode> for String {
    fn from(role: RoleCode) -> Self {
        role.as_str().to_string()
    }
}

/// True iff the set grants administrator capability.
pub fn is_admin(roles: &RoleSet) -> bool {
    roles.contains(&RoleCode::Admin)
}

/// True iff the set grants staff capability. Admins are staff.
pub fn is_staff(roles: &RoleSet) -> bool {
    roles.contains(&RoleCode::Staff) || roles.contains(&RoleCode::Admin)
}
