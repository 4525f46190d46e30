//! Shared utilities and types for feature modules
//!
//! # Contents
//!
//! - **validation**: Field rules, email checks and id parsing
//! - **test_helpers**: Test fixtures and utilities (test-only)

pub mod validation;

#[cfg(test)]
pub mod test_helpers;

// Re-export commonly used types
pub use validation::{is_valid_email, parse_customer_id, FieldError, InvalidCustomerId, Validator};
