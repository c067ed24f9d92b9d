//! Employee records exchanged with the data store

use serde::{Deserialize, Serialize};

use super::{DEFAULT_AVATAR_URL, EmployeeId, EmployeeStatus};
use crate::errors::{SharedError, SharedResult};

/// One roster entry as returned by the data store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    /// Absent only for drafts that were never persisted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<EmployeeId>,
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    /// ISO-8601 date or date-time, kept verbatim
    pub date_started: String,
    #[serde(default)]
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl Employee {
    /// Build a persisted employee, rejecting empty names
    pub fn new(
        id: impl Into<EmployeeId>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        date_started: impl Into<String>,
    ) -> SharedResult<Self> {
        let mut employee = Self::draft(first_name, last_name, department, date_started)?;
        employee.id = Some(id.into());
        Ok(employee)
    }

    /// Build an employee that has no store identifier yet
    pub fn draft(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        date_started: impl Into<String>,
    ) -> SharedResult<Self> {
        let first_name = non_empty("firstName", first_name.into())?;
        let last_name = non_empty("lastName", last_name.into())?;

        Ok(Self {
            id: None,
            first_name,
            last_name,
            department: department.into(),
            date_started: date_started.into(),
            quote: String::new(),
            status: None,
            avatar_url: None,
        })
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar_url.into());
        self
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Status used for display and search; `active` when the store sent none
    pub fn effective_status(&self) -> EmployeeStatus {
        self.status.unwrap_or_default()
    }

    pub fn effective_avatar_url(&self) -> &str {
        self.avatar_url.as_deref().unwrap_or(DEFAULT_AVATAR_URL)
    }
}

/// Body of a create request: an employee without an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
    pub department: String,
    pub date_started: String,
    pub quote: String,
    pub status: EmployeeStatus,
    pub avatar_url: String,
}

impl NewEmployee {
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        department: impl Into<String>,
        date_started: impl Into<String>,
    ) -> SharedResult<Self> {
        Ok(Self {
            first_name: non_empty("firstName", first_name.into())?,
            last_name: non_empty("lastName", last_name.into())?,
            department: department.into(),
            date_started: date_started.into(),
            quote: String::new(),
            status: EmployeeStatus::default(),
            avatar_url: DEFAULT_AVATAR_URL.to_string(),
        })
    }

    pub fn with_quote(mut self, quote: impl Into<String>) -> Self {
        self.quote = quote.into();
        self
    }

    pub fn with_status(mut self, status: EmployeeStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_avatar_url(mut self, avatar_url: impl Into<String>) -> Self {
        self.avatar_url = avatar_url.into();
        self
    }
}

/// Body of an update request; `None` fields are left out of the JSON
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialEmployee {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_started: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EmployeeStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

impl PartialEmployee {
    pub fn is_empty(&self) -> bool {
        *self == PartialEmployee::default()
    }
}

fn non_empty(field: &str, value: String) -> SharedResult<String> {
    if value.trim().is_empty() {
        return Err(SharedError::empty_field(field));
    }
    Ok(value)
}
