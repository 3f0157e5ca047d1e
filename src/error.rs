//! Error types for gateway operations.

use thiserror::Error;

/// Result type for gateway operations.
pub type GatewayResult<T> = Result<T, GatewayError>;

/// Errors that can occur during gateway operations.
#[derive(Error, Debug)]
pub enum GatewayError {
    /// Statement's leading keyword is not allowed for the invoked method.
    ///
    /// Raised before any connection is acquired.
    #[error("invalid SQL command: {command}. Allowed commands are: {allowed}")]
    InvalidCommand {
        /// The offending leading keyword, upper-cased.
        command: String,
        /// The allow-list for the invoked method.
        allowed: &'static str,
    },

    /// Connection pool error.
    #[error("pool error: {0}")]
    Pool(#[from] deadpool_postgres::PoolError),

    /// PostgreSQL error surfaced by statement execution.
    #[error("postgres error: {0}")]
    Driver(#[from] tokio_postgres::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// TLS connector construction error.
    #[error("tls error: {0}")]
    Tls(String),

    /// Row column decode error.
    #[error("decode error: {0}")]
    Decode(String),

    /// Failure during pool teardown.
    #[error("shutdown error: {0}")]
    Shutdown(String),
}

impl GatewayError {
    /// Create a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create a TLS error.
    pub fn tls(message: impl Into<String>) -> Self {
        Self::Tls(message.into())
    }

    /// Create a decode error.
    pub fn decode(message: impl Into<String>) -> Self {
        Self::Decode(message.into())
    }

    /// Create a shutdown error.
    pub fn shutdown(message: impl Into<String>) -> Self {
        Self::Shutdown(message.into())
    }

    /// Check if this is a classification failure.
    pub fn is_invalid_command(&self) -> bool {
        matches!(self, Self::InvalidCommand { .. })
    }

    /// Check if this failure came from the driver stack.
    pub fn is_driver(&self) -> bool {
        matches!(self, Self::Pool(_) | Self::Driver(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = GatewayError::config("missing database name");
        assert!(matches!(err, GatewayError::Config(_)));

        let err = GatewayError::tls("no root certificates");
        assert!(matches!(err, GatewayError::Tls(_)));

        let err = GatewayError::shutdown("teardown failed");
        assert!(matches!(err, GatewayError::Shutdown(_)));
    }

    #[test]
    fn test_invalid_command_message_names_token_and_allow_list() {
        let err = GatewayError::InvalidCommand {
            command: "SELECT".to_string(),
            allowed: "INSERT, UPDATE, DELETE",
        };
        let message = err.to_string();
        assert!(message.contains("SELECT"));
        assert!(message.contains("INSERT, UPDATE, DELETE"));
        assert!(err.is_invalid_command());
        assert!(!err.is_driver());
    }
}
