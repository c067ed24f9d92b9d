//! Edit session for one employee
//!
//! Drives an [`EditBuffer`] through its lifecycle:
//! `Uninitialized -> Staged -> Committed`, with a persist failure moving the
//! session to `Failed`, from which the user may keep editing or retry.

use std::sync::Arc;

use shared::{Employee, EmployeeId, component_info, component_warn};

use crate::core::{EditBuffer, FieldEdit};
use crate::error::{DirectoryError, DirectoryResult};
use crate::services::fetch_departments;
use crate::traits::EmployeeStore;

const COMPONENT: &str = "edit_session";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditPhase {
    Uninitialized,
    Staged,
    Committed,
    Failed,
}

pub struct EditSession<S: EmployeeStore> {
    store: Arc<S>,
    buffer: Option<EditBuffer>,
    departments: Vec<String>,
    phase: EditPhase,
    last_error: Option<String>,
}

impl<S: EmployeeStore> EditSession<S> {
    pub fn new(store: Arc<S>) -> Self {
        Self {
            store,
            buffer: None,
            departments: Vec::new(),
            phase: EditPhase::Uninitialized,
            last_error: None,
        }
    }

    /// Fetch the employee and the department options, then stage
    pub async fn open(store: Arc<S>, id: &EmployeeId) -> DirectoryResult<Self> {
        let mut session = Self::new(store);
        session.load(id).await?;
        Ok(session)
    }

    pub async fn load(&mut self, id: &EmployeeId) -> DirectoryResult<()> {
        self.ensure_not_committed()?;

        let employee = self.store.get_employee(id).await?;
        let departments = fetch_departments(self.store.as_ref()).await?;

        self.departments = departments;
        self.stage(employee);
        Ok(())
    }

    /// Stage an already fetched record, discarding earlier edits
    pub fn stage(&mut self, original: Employee) {
        self.buffer = Some(EditBuffer::stage(original));
        self.phase = EditPhase::Staged;
        self.last_error = None;
    }

    /// Apply one field edit
    ///
    /// Department changes must name a known department once options have
    /// been loaded.
    pub fn set(&mut self, edit: FieldEdit) -> DirectoryResult<()> {
        self.ensure_not_committed()?;

        if let FieldEdit::Department(department) = &edit {
            if !department.is_empty()
                && !self.departments.is_empty()
                && !self.departments.iter().any(|known| known == department)
            {
                return Err(DirectoryError::validation(format!("unknown department {department:?}")));
            }
        }

        let buffer = self
            .buffer
            .take()
            .ok_or_else(|| DirectoryError::invalid_state("no employee staged"))?;
        self.buffer = Some(buffer.set(edit));
        self.phase = EditPhase::Staged;
        Ok(())
    }

    /// Build the payload and persist it
    ///
    /// A validation failure leaves the session staged. A persist failure
    /// moves it to `Failed` and keeps every staged edit for a retry.
    pub async fn save(&mut self) -> DirectoryResult<Employee> {
        self.ensure_not_committed()?;

        let buffer = self
            .buffer
            .as_ref()
            .ok_or_else(|| DirectoryError::invalid_state("no employee staged"))?;
        let id = buffer
            .target_id()
            .cloned()
            .ok_or_else(|| DirectoryError::validation("employee id is missing"))?;
        let payload = buffer.to_update_payload()?;

        match self.store.update_employee(&id, &payload).await {
            Ok(updated) => {
                component_info!(COMPONENT, id = %id, "Employee updated");
                self.phase = EditPhase::Committed;
                self.last_error = None;
                Ok(updated)
            }
            Err(e) => {
                component_warn!(COMPONENT, id = %id, error = %e, "Error updating employee details");
                self.phase = EditPhase::Failed;
                self.last_error = Some(e.to_string());
                Err(e)
            }
        }
    }

    pub fn phase(&self) -> EditPhase {
        self.phase
    }

    pub fn buffer(&self) -> Option<&EditBuffer> {
        self.buffer.as_ref()
    }

    /// Options offered for the department field
    pub fn departments(&self) -> &[String] {
        &self.departments
    }

    /// Message of the most recent persist failure
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    fn ensure_not_committed(&self) -> DirectoryResult<()> {
        match self.phase {
            EditPhase::Committed => Err(DirectoryError::invalid_state("edit session already committed")),
            _ => Ok(()),
        }
    }
}
