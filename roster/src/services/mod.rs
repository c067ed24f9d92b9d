//! Service implementations
//!
//! Real implementations of all service traits for production use

pub mod departments;
pub mod rest_store;

#[cfg(test)]
mod tests;

// Re-export service implementations
pub use departments::fetch_departments;
pub use rest_store::RestEmployeeStore;
