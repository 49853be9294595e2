//! Error types for the SuiteTalk client
//!
//! This module defines the error hierarchy for the whole crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// Structured detail parsed from a non-2xx NetSuite error body.
///
/// NetSuite reports errors as `{title, type, status, "o:errorDetails":
/// [{detail, ...}]}`; only the first detail entry is retained.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ErrorDetail {
    /// Short human-readable summary (`title`)
    pub title: String,
    /// Error type URI (`type`)
    pub error_type: String,
    /// HTTP status code reported in the body
    pub status: u16,
    /// First entry of `o:errorDetails[].detail`, when present
    pub detail: String,
}

impl std::fmt::Display for ErrorDetail {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}): {} [{}]",
            self.title, self.status, self.detail, self.error_type
        )
    }
}

/// The main error type for the SuiteTalk client
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required credential: {field}")]
    MissingCredential { field: String },

    // ============================================================================
    // Protocol Errors
    // ============================================================================
    #[error("Protocol error: {message}")]
    Protocol { message: String },

    #[error("Remote error: {0}")]
    Remote(ErrorDetail),

    // ============================================================================
    // Transport Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid header value: {message}")]
    InvalidHeader { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing credential error
    pub fn missing_credential(field: impl Into<String>) -> Self {
        Self::MissingCredential {
            field: field.into(),
        }
    }

    /// Create a protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create an invalid header error
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Check if this error came from a non-2xx response
    pub fn is_remote(&self) -> bool {
        matches!(self, Error::Remote(_))
    }
}

/// Result type alias for the SuiteTalk client
pub type Result<T> = std::result::Result<T, Error>;
