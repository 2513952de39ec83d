//! Assignment extraction
//!
//! Renders the assignment bucket and drops those statements from the
//! listing. The assignment bucket itself is kept as the record of what was
//! removed; only `master` reflects the removal.

use crate::features::classification::domain::Classification;
use crate::features::parsing::domain::StatementKind;

/// Result of [`extract_assignments`]
#[derive(Debug, Clone)]
pub struct AssignmentExtraction<'a> {
    /// Source text of each assignment, in bucket order
    pub rendered: Vec<String>,
    /// Input classification with assignments removed from `master`
    pub classification: Classification<'a>,
}

pub fn extract_assignments(classification: Classification<'_>) -> AssignmentExtraction<'_> {
    let rendered: Vec<String> = classification
        .bucket(StatementKind::Assign)
        .iter()
        .map(|node| node.render())
        .collect();

    let classification = classification.without_kind_in_master(StatementKind::Assign);
    tracing::debug!(
        "Extracted {} assignments, {} statements remain",
        rendered.len(),
        classification.len()
    );

    AssignmentExtraction {
        rendered,
        classification,
    }
}
