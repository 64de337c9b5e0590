//! Domain-level constants.
//!
//! These constants define business rules and validation requirements.

// =============================================================================
// Role Codes
// =============================================================================

/// Role granted to every newly registered account
pub const ROLE_CUSTOMER: &str = "ROLE_CUSTOMER";

/// Box office and venue staff
pub const ROLE_STAFF: &str = "ROLE_STAFF";

/// Administrator role with elevated privileges
pub const ROLE_ADMIN: &str = "ROLE_ADMIN";

// =============================================================================
// Validation
// =============================================================================

/// Accepted email grammar: dot-separated local part, one or more DNS labels,
/// alphabetic top-level label of 2 to 7 characters.
pub const EMAIL_PATTERN: &str =
    r"^[a-zA-Z0-9_+&*-]+(?:\.[a-zA-Z0-9_+&*-]+)*@(?:[a-zA-Z0-9-]+\.)+[a-zA-Z]{2,7}$";

