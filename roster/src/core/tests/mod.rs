//! Tests for the core query engine

pub mod departments;
pub mod grouping;
