//! Shared module - Common types
//!
//! Types shared across all features. No tree-sitter or CLI dependencies.

pub mod models;

// Re-exports for convenience
pub use models::*;
