//! Syntax provider port
//!
//! Defines the contract for turning source text into a `SourceUnit`.

use crate::features::parsing::domain::SourceUnit;
use crate::shared::models::Result;

/// Syntax provider - abstraction over the parsing implementation.
///
/// Implementations discover each statement's kind and capture its rendered
/// text while parsing; the rest of the crate never sees the raw tree.
pub trait SyntaxProvider: Send + Sync {
    /// Parse one source file into a unit stamped with `unit_id`
    fn parse(&self, source: &str, file_path: &str, unit_id: u32) -> Result<SourceUnit>;

    /// Check if this provider handles the given file extension
    fn supports_extension(&self, ext: &str) -> bool;

    /// Get supported language name
    fn language_name(&self) -> &'static str;
}
