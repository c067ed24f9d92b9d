//! Staged edits for a single employee

use shared::{DEFAULT_AVATAR_URL, Employee, EmployeeId, EmployeeStatus, PartialEmployee};

use crate::error::{DirectoryError, DirectoryResult};

/// A single field change entered by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    FirstName(String),
    LastName(String),
    DateStarted(String),
    Department(String),
    Quote(String),
    Status(EmployeeStatus),
    AvatarUrl(String),
}

/// Original record plus pending overrides
///
/// Staging never touches `original`. An empty text value counts as "not
/// entered" and falls back to the original field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditBuffer {
    original: Employee,
    pending: PartialEmployee,
}

impl EditBuffer {
    pub fn stage(original: Employee) -> Self {
        Self {
            original,
            pending: PartialEmployee::default(),
        }
    }

    pub fn set(mut self, edit: FieldEdit) -> Self {
        let pending = &mut self.pending;
        match edit {
            FieldEdit::FirstName(value) => pending.first_name = Some(value),
            FieldEdit::LastName(value) => pending.last_name = Some(value),
            FieldEdit::DateStarted(value) => pending.date_started = Some(value),
            FieldEdit::Department(value) => pending.department = Some(value),
            FieldEdit::Quote(value) => pending.quote = Some(value),
            FieldEdit::Status(value) => pending.status = Some(value),
            FieldEdit::AvatarUrl(value) => pending.avatar_url = Some(value),
        }
        self
    }

    pub fn original(&self) -> &Employee {
        &self.original
    }

    pub fn pending(&self) -> &PartialEmployee {
        &self.pending
    }

    pub fn target_id(&self) -> Option<&EmployeeId> {
        self.original.id.as_ref()
    }

    /// The record as it would look after saving
    pub fn resolved(&self) -> Employee {
        let original = &self.original;
        let pending = &self.pending;

        Employee {
            id: original.id.clone(),
            first_name: pick(&pending.first_name, &original.first_name),
            last_name: pick(&pending.last_name, &original.last_name),
            department: pick(&pending.department, &original.department),
            date_started: pick(&pending.date_started, &original.date_started),
            quote: pick(&pending.quote, &original.quote),
            status: Some(pending.status.or(original.status).unwrap_or_default()),
            avatar_url: Some(
                non_blank(&pending.avatar_url)
                    .or_else(|| non_blank(&original.avatar_url))
                    .unwrap_or(DEFAULT_AVATAR_URL)
                    .to_string(),
            ),
        }
    }

    /// Complete update body for the bound employee
    pub fn to_update_payload(&self) -> DirectoryResult<PartialEmployee> {
        if self.target_id().is_none() {
            return Err(DirectoryError::validation("employee id is missing"));
        }

        let resolved = self.resolved();
        Ok(PartialEmployee {
            first_name: Some(resolved.first_name),
            last_name: Some(resolved.last_name),
            department: Some(resolved.department),
            date_started: Some(resolved.date_started),
            quote: Some(resolved.quote),
            status: resolved.status,
            avatar_url: resolved.avatar_url,
        })
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

fn pick(staged: &Option<String>, original: &str) -> String {
    non_blank(staged).unwrap_or(original).to_string()
}
