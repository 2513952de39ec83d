//! Statement Classification Feature
//!
//! Buckets a function body's statements by kind while keeping the full
//! source-order listing, and removes assignments from that listing.
//!
//! ## Structure
//! - `domain/` - Classification
//! - `application/` - classify, extract_assignments
//! - `report` - serializable view for output

pub mod application;
pub mod domain;
pub mod report;

// Re-exports
pub use application::{classify, classify_function, extract_assignments, AssignmentExtraction};
pub use domain::Classification;
pub use report::ClassificationReport;
