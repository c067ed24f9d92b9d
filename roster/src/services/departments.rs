//! Department options for the edit form

use crate::core::{Roster, distinct_departments};
use crate::error::{DirectoryError, DirectoryResult};
use crate::traits::EmployeeStore;

const COMPONENT: &str = "departments";

/// Fetch the roster and derive its distinct departments
///
/// Any store failure is reported as a single fetch error.
pub async fn fetch_departments<S>(store: &S) -> DirectoryResult<Vec<String>>
where
    S: EmployeeStore + ?Sized,
{
    match store.list_employees().await {
        Ok(employees) => Ok(distinct_departments(&Roster::new(employees))),
        Err(e) => {
            shared::component_error!(COMPONENT, error = %e, "Error fetching departments");
            Err(DirectoryError::fetch("Failed to fetch departments"))
        }
    }
}
