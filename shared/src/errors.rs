//! Shared error types for the roster directory

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SharedError {
    #[error("Invalid employee record: {field} {reason}")]
    InvalidRecord { field: String, reason: String },

    #[error("Invalid employee status: {input}")]
    InvalidStatus { input: String },
}

impl SharedError {
    pub fn empty_field(field: &str) -> Self {
        SharedError::InvalidRecord {
            field: field.to_string(),
            reason: "must not be empty".to_string(),
        }
    }
}

pub type SharedResult<T> = Result<T, SharedError>;
