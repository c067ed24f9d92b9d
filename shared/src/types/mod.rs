//! Core types used throughout the roster directory

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::SharedError;

pub mod employee;

pub use employee::{Employee, NewEmployee, PartialEmployee};

/// Avatar shown for employees that never uploaded one
pub const DEFAULT_AVATAR_URL: &str = "https://www.thispersondoesnotexist.com/";

/// Opaque identifier assigned by the data store
///
/// The store hands ids out either as JSON strings or as integers, so both
/// are accepted on the way in. They always go back out as strings.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "WireId", into = "String")]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl From<EmployeeId> for String {
    fn from(id: EmployeeId) -> Self {
        id.0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum WireId {
    Text(String),
    Number(i64),
}

impl From<WireId> for EmployeeId {
    fn from(wire: WireId) -> Self {
        match wire {
            WireId::Text(text) => EmployeeId(text),
            WireId::Number(number) => EmployeeId(number.to_string()),
        }
    }
}

/// Employment status of a roster entry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmployeeStatus {
    #[default]
    Active,
    Inactive,
}

impl EmployeeStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::Inactive => "inactive",
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl std::str::FromStr for EmployeeStatus {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(EmployeeStatus::Active),
            "inactive" => Ok(EmployeeStatus::Inactive),
            _ => Err(SharedError::InvalidStatus { input: s.to_string() }),
        }
    }
}
