//! Classification use cases

mod classify;
mod extract_assignments;

pub use classify::{classify, classify_function};
pub use extract_assignments::{extract_assignments, AssignmentExtraction};
