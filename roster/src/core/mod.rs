//! Core business logic modules
//!
//! Pure business logic with no I/O dependencies

pub mod departments;
pub mod edit_buffer;
pub mod grouping;
pub mod roster;
pub mod search;
pub mod view;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use departments::distinct_departments;
pub use edit_buffer::{EditBuffer, FieldEdit};
pub use grouping::{DepartmentGroup, group_by_department, group_employees};
pub use roster::Roster;
pub use search::{filter, format_start_date, matches};
pub use view::{DepartmentSection, DirectoryView, EmployeeRow, query};
