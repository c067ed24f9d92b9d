//! Directory error types

use thiserror::Error;
use shared::SharedError;

/// Result type for directory operations
pub type DirectoryResult<T> = Result<T, DirectoryError>;

/// Directory error types
#[derive(Error, Debug)]
pub enum DirectoryError {
    #[error("Fetch failed: {message}")]
    Fetch { message: String },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Employee not found: {id}")]
    NotFound { id: String },

    #[error("Could not decode store response: {message}")]
    Decode { message: String },

    #[error("Invalid edit session state: {message}")]
    InvalidState { message: String },

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid record: {0}")]
    Shared(#[from] SharedError),
}

impl DirectoryError {
    pub fn fetch(message: impl Into<String>) -> Self {
        DirectoryError::Fetch { message: message.into() }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        DirectoryError::Validation { message: message.into() }
    }

    pub fn not_found(id: impl ToString) -> Self {
        DirectoryError::NotFound { id: id.to_string() }
    }

    pub fn invalid_state(message: impl Into<String>) -> Self {
        DirectoryError::InvalidState { message: message.into() }
    }

    pub fn config(message: impl Into<String>) -> Self {
        DirectoryError::Config { message: message.into() }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, DirectoryError::NotFound { .. })
    }
}

impl From<reqwest::Error> for DirectoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            DirectoryError::Decode { message: err.to_string() }
        } else {
            DirectoryError::Fetch { message: err.to_string() }
        }
    }
}

impl From<serde_json::Error> for DirectoryError {
    fn from(err: serde_json::Error) -> Self {
        DirectoryError::Decode { message: err.to_string() }
    }
}
