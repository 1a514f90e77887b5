//! Error types and error handling for the Ishtar site search service.
//!
//! This module defines the error types used throughout the
//! application. Protocol-specific error handling (HTTP status codes)
//! is handled in the respective adapter modules.

use thiserror::Error;

/// Result type alias for Ishtar operations
pub type Result<T> = std::result::Result<T, IshtarError>;

/// Main error type for the Ishtar service
#[derive(Error, Debug)]
pub enum IshtarError {
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("Content source '{source_name}' unavailable: {message}")]
    ContentUnavailable {
        source_name: String,
        message: String,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),
}

impl IshtarError {
    /// Get user-friendly error message
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Shorthand for a content source failure
    pub fn unavailable(source_name: impl Into<String>, message: impl Into<String>) -> Self {
        IshtarError::ContentUnavailable {
            source_name: source_name.into(),
            message: message.into(),
        }
    }

    /// Check if this is a bad request error (invalid input)
    pub fn is_bad_request(&self) -> bool {
        matches!(
            self,
            IshtarError::InvalidQuery(_) | IshtarError::ConfigError(_)
        )
    }
}
