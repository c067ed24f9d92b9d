//! Service trait definitions for dependency injection
//!
//! The remote data store is reached only through this trait so the query
//! engine and edit sessions can be tested without a network.

use async_trait::async_trait;
use shared::{Employee, EmployeeId, NewEmployee, PartialEmployee};

use crate::error::DirectoryResult;

/// REST data store holding the `employees` collection
#[mockall::automock]
#[async_trait]
pub trait EmployeeStore: Send + Sync {
    /// `GET /employees`, in store order
    async fn list_employees(&self) -> DirectoryResult<Vec<Employee>>;

    /// `GET /employees/{id}`
    async fn get_employee(&self, id: &EmployeeId) -> DirectoryResult<Employee>;

    /// `POST /employees`
    async fn create_employee(&self, employee: &NewEmployee) -> DirectoryResult<Employee>;

    /// `PUT /employees/{id}` with a partial body
    async fn update_employee(&self, id: &EmployeeId, update: &PartialEmployee) -> DirectoryResult<Employee>;

    /// `DELETE /employees/{id}`
    async fn delete_employee(&self, id: &EmployeeId) -> DirectoryResult<()>;
}
