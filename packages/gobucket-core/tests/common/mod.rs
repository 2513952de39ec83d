//! Common test utilities for gobucket-core
//!
//! Fixtures and builders shared by the integration tests.

#![allow(dead_code)]

mod builders;
mod fixtures;

pub use builders::*;
pub use fixtures::*;
