//! Per-function statement classification

use rustc_hash::FxHashSet;

use crate::features::parsing::domain::{StatementKind, StatementNode, StmtId};

/// Statements of one function body, bucketed by kind.
///
/// Invariants:
/// - `master` holds every statement in source order.
/// - Each recognized statement sits in exactly one bucket; bucket order
///   follows `master` order.
/// - Every kind has a bucket, possibly empty.
///
/// Removal only rewrites `master`. Buckets keep what was removed.
#[derive(Debug, Clone)]
pub struct Classification<'a> {
    buckets: [Vec<&'a StatementNode>; StatementKind::COUNT],
    master: Vec<&'a StatementNode>,
    unrecognized: usize,
}

impl<'a> Classification<'a> {
    pub fn new() -> Self {
        Self {
            buckets: std::array::from_fn(|_| Vec::new()),
            master: Vec::new(),
            unrecognized: 0,
        }
    }

    /// Append a statement to `master` and, if its kind is known, to its bucket
    pub(crate) fn push(&mut self, node: &'a StatementNode) {
        match node.kind() {
            Some(kind) => self.buckets[kind.index()].push(node),
            None => self.unrecognized += 1,
        }
        self.master.push(node);
    }

    pub fn bucket(&self, kind: StatementKind) -> &[&'a StatementNode] {
        &self.buckets[kind.index()]
    }

    /// Every bucket, in `StatementKind::ALL` order
    pub fn buckets(&self) -> impl Iterator<Item = (StatementKind, &[&'a StatementNode])> + '_ {
        StatementKind::ALL
            .into_iter()
            .map(move |kind| (kind, self.bucket(kind)))
    }

    /// All statements in current program order
    pub fn master(&self) -> &[&'a StatementNode] {
        &self.master
    }

    pub fn len(&self) -> usize {
        self.master.len()
    }

    pub fn is_empty(&self) -> bool {
        self.master.is_empty()
    }

    /// Statements in `master` whose kind was not recognized (in no bucket)
    pub fn unrecognized_count(&self) -> usize {
        self.unrecognized
    }

    pub fn contains(&self, node: &StatementNode) -> bool {
        self.master.iter().any(|n| n.is_same(node))
    }

    /// Remove every member of `removed` from `master`, by identity.
    ///
    /// Survivors keep their relative order. Buckets are left untouched.
    pub fn remove_from_master(mut self, removed: &[&StatementNode]) -> Self {
        let ids: FxHashSet<StmtId> = removed.iter().map(|n| n.id()).collect();

        self.master = self
            .master
            .into_iter()
            .filter(|n| !ids.contains(&n.id()))
            .collect();
        self.unrecognized = self.master.iter().filter(|n| n.kind().is_none()).count();
        self
    }

    /// Remove every statement of `kind` from `master`; buckets are kept
    pub fn without_kind_in_master(self, kind: StatementKind) -> Self {
        let members: Vec<&'a StatementNode> = self.bucket(kind).to_vec();
        self.remove_from_master(&members)
    }
}

impl Default for Classification<'_> {
    fn default() -> Self {
        Self::new()
    }
}
