//! Shared types for the employee roster directory
//!
//! Contains the employee records exchanged with the REST data store,
//! the errors raised while building them, and tracing setup shared by
//! every binary in the workspace.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
