//! Shared test utilities for file-navigator integration tests
//!
//! Provides temporary directory trees, prepared scenarios and output
//! predicates used by both the library-level and binary-level tests.

pub mod assertions;
pub mod fixtures;
pub mod workspace;
