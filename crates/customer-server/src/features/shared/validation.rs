//! Shared validation utilities
//!
//! Field rules are declared one after another on a [`Validator`], which
//! accumulates every failure instead of stopping at the first one:
//!
//! ```rust,ignore
//! let mut v = Validator::new();
//! v.not_empty("firstName", first_name, "First name is required");
//! v.is_email("email", email, "Email must be proper format");
//! v.finish()?; // Err(Vec<FieldError>) when any rule failed
//! ```

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;
use uuid::Uuid;

/// Longest address accepted, per RFC 5321 path limits
const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_PART_LENGTH: usize = 64;

static EMAIL_PATTERN: LazyLock<Option<Regex>> = LazyLock::new(|| {
    Regex::new(
        r"^[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+(?:\.[\p{L}\p{N}!#$%&'*+/=?^_`{|}~-]+)*@(?:[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?\.)+[A-Za-z]{2,63}$",
    )
    .ok()
});

/// A single failed rule on a request field
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Accumulates rule failures for one request
#[derive(Debug, Default)]
pub struct Validator {
    errors: Vec<FieldError>,
}

impl Validator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Value must be present and contain something other than whitespace
    pub fn not_empty(&mut self, field: &str, value: Option<&str>, message: &str) -> &mut Self {
        if value.is_none_or(|v| v.trim().is_empty()) {
            self.fail(field, message);
        }
        self
    }

    /// Value must be a well-formed email address; a missing value fails
    pub fn is_email(&mut self, field: &str, value: Option<&str>, message: &str) -> &mut Self {
        if !value.is_some_and(is_valid_email) {
            self.fail(field, message);
        }
        self
    }

    /// Like [`Validator::is_email`], but an absent value is skipped
    pub fn optional_email(
        &mut self,
        field: &str,
        value: Option<&str>,
        message: &str,
    ) -> &mut Self {
        if let Some(v) = value {
            if !is_valid_email(v) {
                self.fail(field, message);
            }
        }
        self
    }

    /// Record a failure found outside the built-in rules
    pub fn fail(&mut self, field: &str, message: &str) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    pub fn errors(&self) -> &[FieldError] {
        &self.errors
    }

    /// `Ok` when no rule failed, otherwise every failure in declaration order
    pub fn finish(self) -> Result<(), Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(self.errors)
        }
    }
}

/// Check an email address
///
/// # Rules
/// - At most 254 characters, local part at most 64
/// - Dot-atom local part (no leading, trailing or doubled dots); Unicode
///   letters and digits are allowed there
/// - Domain of dot-separated labels ending in an alphabetic TLD
pub fn is_valid_email(email: &str) -> bool {
    if email.len() > MAX_EMAIL_LENGTH {
        return false;
    }

    let Some((local, _domain)) = email.rsplit_once('@') else {
        return false;
    };
    if local.len() > MAX_LOCAL_PART_LENGTH {
        return false;
    }

    EMAIL_PATTERN
        .as_ref()
        .is_some_and(|pattern| pattern.is_match(email))
}

/// The supplied customer id is not a valid identifier
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Invalid customer id '{0}'")]
pub struct InvalidCustomerId(pub String);

/// Parse a customer identifier taken from the request path
pub fn parse_customer_id(raw: &str) -> Result<Uuid, InvalidCustomerId> {
    Uuid::parse_str(raw.trim()).map_err(|_| InvalidCustomerId(raw.to_string()))
}
