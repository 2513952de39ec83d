//! Source location types

use serde::{Deserialize, Serialize};

/// Span in source code (1-based lines, 0-based columns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Span {
    pub start_line: u32,
    pub start_col: u32,
    pub end_line: u32,
    pub end_col: u32,
}

impl Span {
    pub fn new(start_line: u32, start_col: u32, end_line: u32, end_col: u32) -> Self {
        Self {
            start_line,
            start_col,
            end_line,
            end_col,
        }
    }

    /// Zero span (for synthesized nodes and tests)
    pub fn zero() -> Self {
        Self::new(0, 0, 0, 0)
    }
}

impl Default for Span {
    fn default() -> Self {
        Self::zero()
    }
}
