//! Statement classifier
//!
//! Single pass over a body in source order. The body is only borrowed;
//! the classification holds references into it.

use crate::features::classification::domain::Classification;
use crate::features::parsing::domain::{FunctionDefinition, StatementNode};

/// Bucket `body` by statement kind, keeping the full listing in order
pub fn classify<'a>(body: &'a [StatementNode]) -> Classification<'a> {
    let mut classification = Classification::new();
    for node in body {
        if node.kind().is_none() {
            // Closed kind set should cover every body statement
            tracing::warn!(
                "Unrecognized statement kind `{}` at line {}; kept in listing only",
                node.raw_kind,
                node.span.start_line
            );
        }
        classification.push(node);
    }
    classification
}

/// Classify the body of a located function
pub fn classify_function(function: &FunctionDefinition) -> Classification<'_> {
    let classification = classify(&function.body);
    tracing::debug!(
        "Classified {}: {} statements",
        function.qualified_name(),
        classification.len()
    );
    classification
}
