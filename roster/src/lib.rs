//! Employee roster directory
//!
//! Query engine over an in-memory roster (department index, free-text
//! search, department grouping), single-employee edit sessions, and the
//! REST client for the remote `employees` store.

pub mod config;
pub mod core;
pub mod error;
pub mod services;
pub mod session;
pub mod state;
pub mod traits;

// Re-export main types
pub use config::DirectoryConfig;
pub use error::{DirectoryError, DirectoryResult};
pub use session::{EditPhase, EditSession};
pub use state::{LoadOutcome, RosterStore};

// Re-export the query engine
pub use crate::core::{
    DepartmentGroup, DepartmentSection, DirectoryView, EditBuffer, EmployeeRow, FieldEdit, Roster,
    distinct_departments, filter, format_start_date, group_by_department, matches, query,
};

// Re-export trait definitions and implementations
pub use services::{RestEmployeeStore, fetch_departments};
pub use traits::{EmployeeStore, MockEmployeeStore};
