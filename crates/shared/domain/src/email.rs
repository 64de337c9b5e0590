//! Email value object.
//!
//! An `Email` can only be obtained through [`Email::of`], so holding one is
//! proof that the address matched [`EMAIL_PATTERN`]. The raw input is kept
//! verbatim: no trimming, no case folding.

use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::constants::EMAIL_PATTERN;
use crate::error::{DomainError, DomainResult};

static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(EMAIL_PATTERN).expect("email pattern is a valid regex"));

/// Validated email address, compared by value.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Email(String);

impl Email {
    /// Validate `raw` and wrap it.
    ///
    /// # Errors
    /// Returns [`DomainError::Validation`] when `raw` is not a well-formed
    /// address, including the empty string.
    pub fn of(raw: impl Into<String>) -> DomainResult<Self> {
        let raw = raw.into();
        if !EMAIL_REGEX.is_match(&raw) {
            return Err(DomainError::validation(format!(
                "Invalid email format: {}",
                raw
            )));
        }
        Ok(Self(raw))
    }

    /// Borrow the address as a string slice.
    pub fn value(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Email {
    type Error = DomainError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl TryFrom<&str> for Email {
    type Error = DomainError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::of(value)
    }
}

impl FromStr for Email {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::of(s)
    }
}

impl From<Email> for String {
    fn from(email: Email) -> Self {
        email.0
    }
}
