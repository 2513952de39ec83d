//! Test data builders

use gobucket_core::{StatementKind, StatementNode, StmtId};

/// Build a body from kinds; `None` yields an unrecognized statement
pub fn body_from_kinds(kinds: &[Option<StatementKind>]) -> Vec<StatementNode> {
    kinds
        .iter()
        .enumerate()
        .map(|(i, kind)| {
            let text = match kind {
                Some(kind) => format!("{} #{}", kind.go_type_name(), i),
                None => format!("unknown #{}", i),
            };
            StatementNode::new(StmtId::new(0, i as u32), *kind, text)
        })
        .collect()
}

pub fn ids(nodes: &[&StatementNode]) -> Vec<StmtId> {
    nodes.iter().map(|n| n.id()).collect()
}

pub fn texts(nodes: &[&StatementNode]) -> Vec<String> {
    nodes.iter().map(|n| n.render()).collect()
}
