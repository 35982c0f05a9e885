//! Custom error types for scribe-ledger
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

/// The main error type for scribe-ledger operations
#[derive(Error, Debug)]
pub enum ScribeError {
    /// Configuration-related errors (including a missing AI credential)
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Validation errors for user input
    #[error("Validation error: {0}")]
    Validation(String),

    /// The AI service could not be reached or answered with an error
    #[error("AI service error: {0}")]
    Ai(String),

    /// The model's reply did not have the requested shape
    #[error("Could not interpret entry: {0}")]
    Interpretation(String),

    /// Storage errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Export errors
    #[error("Export error: {0}")]
    Export(String),
}

impl ScribeError {
    /// Create the error raised when no AI credential is configured
    pub fn missing_api_key() -> Self {
        Self::Config(
            "AI API key is missing; pass --api-key or set GEMINI_API_KEY".to_string(),
        )
    }

    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Check if this error came from interpreting a free-text entry
    ///
    /// Covers everything the entry path can fail with after the credential
    /// has been resolved: bad input, an unreachable service, or an
    /// unusable reply.
    pub fn is_entry_failure(&self) -> bool {
        matches!(
            self,
            Self::Validation(_) | Self::Ai(_) | Self::Interpretation(_)
        )
    }
}

impl From<std::io::Error> for ScribeError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for ScribeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

impl From<reqwest::Error> for ScribeError {
    fn from(err: reqwest::Error) -> Self {
        Self::Ai(err.to_string())
    }
}

/// Result type alias for scribe-ledger operations
pub type ScribeResult<T> = Result<T, ScribeError>;
