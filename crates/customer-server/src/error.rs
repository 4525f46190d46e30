//! Server-level error types
//!
//! Request-level failures are modelled per operation in
//! `features::customers`; this type covers everything that can stop the
//! server from starting or running.

use thiserror::Error;

/// Result type alias for server operations
pub type ServerResult<T> = std::result::Result<T, ServerError>;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Common error: {0}")]
    Common(#[from] customer_common::CommonError),

    #[error("Configuration error: {0}")]
    Config(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_carry_context() {
        let err = ServerError::Config("invalid listen address".to_string());
        assert_eq!(err.to_string(), "Configuration error: invalid listen address");

        let err: ServerError = std::io::Error::new(std::io::ErrorKind::AddrInUse, "in use").into();
        assert!(err.to_string().starts_with("IO error"));
    }
}
