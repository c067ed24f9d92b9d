//! Service tests for the roster crate
