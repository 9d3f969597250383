//! Common test utilities and fixtures for export-map integration tests
//!
//! This module provides:
//! - `TestRepo` builder for creating throwaway JS/TS projects
//! - Assertions for the JSON section export and text reports

#![allow(unused_imports)]
#![allow(dead_code)]

pub mod assertions;
pub mod test_repo;

pub use assertions::*;
pub use test_repo::TestRepo;
