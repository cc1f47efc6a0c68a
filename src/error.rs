//! Error handling module
//!
//! Provides centralized error handling with proper error types using
//! thiserror. The pricing core itself never fails; these types cover the
//! catalog-file, CLI, and terminal layers.

use thiserror::Error;

/// Main error type for proxytui
#[derive(Error, Debug)]
pub enum ProxyTuiError {
    /// IO errors (file operations, terminal, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Catalog file errors (loading, parsing)
    #[error("Catalog error: {0}")]
    Catalog(String),

    /// Validation errors (user input, catalog values)
    #[error("Validation error: {0}")]
    Validation(String),

    /// Terminal/UI errors
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// General errors (catch-all for edge cases)
    #[error("{0}")]
    General(String),
}

/// Result type alias for proxytui operations
pub type Result<T> = std::result::Result<T, ProxyTuiError>;

// Convenient error constructors
impl ProxyTuiError {
    /// Create a catalog error
    pub fn catalog(msg: impl Into<String>) -> Self {
        Self::Catalog(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create a terminal error
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Create a general error
    pub fn general(msg: impl Into<String>) -> Self {
        Self::General(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProxyTuiError::catalog("duplicate country id");
        assert_eq!(err.to_string(), "Catalog error: duplicate country id");

        let err = ProxyTuiError::validation("unknown proxy type");
        assert_eq!(err.to_string(), "Validation error: unknown proxy type");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: ProxyTuiError = io_err.into();
        assert!(matches!(err, ProxyTuiError::Io(_)));
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: ProxyTuiError = json_err.into();
        assert!(matches!(err, ProxyTuiError::Json(_)));
    }
}
