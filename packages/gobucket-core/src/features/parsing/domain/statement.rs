//! Statement nodes and their closed set of kinds

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::shared::models::Span;

/// Syntactic kind of a statement in a function body.
///
/// The set is closed: every statement form the syntax provider can place
/// directly in a body maps to exactly one member.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatementKind {
    Assign,
    Expression,
    If,
    Malformed,
    Declaration,
    Empty,
    Labeled,
    Send,
    IncDec,
    ConcurrentLaunch,
    Deferred,
    Return,
    Branch,
    Block,
    Switch,
    TypeSwitch,
    CommClause,
    Select,
    For,
    Range,
}

impl StatementKind {
    pub const COUNT: usize = 20;

    /// All kinds, in bucket order
    pub const ALL: [StatementKind; Self::COUNT] = [
        StatementKind::Assign,
        StatementKind::Expression,
        StatementKind::If,
        StatementKind::Malformed,
        StatementKind::Declaration,
        StatementKind::Empty,
        StatementKind::Labeled,
        StatementKind::Send,
        StatementKind::IncDec,
        StatementKind::ConcurrentLaunch,
        StatementKind::Deferred,
        StatementKind::Return,
        StatementKind::Branch,
        StatementKind::Block,
        StatementKind::Switch,
        StatementKind::TypeSwitch,
        StatementKind::CommClause,
        StatementKind::Select,
        StatementKind::For,
        StatementKind::Range,
    ];

    /// Position of this kind in `ALL`
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            StatementKind::Assign => "assign",
            StatementKind::Expression => "expression",
            StatementKind::If => "if",
            StatementKind::Malformed => "malformed",
            StatementKind::Declaration => "declaration",
            StatementKind::Empty => "empty",
            StatementKind::Labeled => "labeled",
            StatementKind::Send => "send",
            StatementKind::IncDec => "inc_dec",
            StatementKind::ConcurrentLaunch => "concurrent_launch",
            StatementKind::Deferred => "deferred",
            StatementKind::Return => "return",
            StatementKind::Branch => "branch",
            StatementKind::Block => "block",
            StatementKind::Switch => "switch",
            StatementKind::TypeSwitch => "type_switch",
            StatementKind::CommClause => "comm_clause",
            StatementKind::Select => "select",
            StatementKind::For => "for",
            StatementKind::Range => "range",
        }
    }

    /// Name of the matching `go/ast` node type (e.g. `AssignStmt`)
    pub fn go_type_name(&self) -> &'static str {
        match self {
            StatementKind::Assign => "AssignStmt",
            StatementKind::Expression => "ExprStmt",
            StatementKind::If => "IfStmt",
            StatementKind::Malformed => "BadStmt",
            StatementKind::Declaration => "DeclStmt",
            StatementKind::Empty => "EmptyStmt",
            StatementKind::Labeled => "LabeledStmt",
            StatementKind::Send => "SendStmt",
            StatementKind::IncDec => "IncDecStmt",
            StatementKind::ConcurrentLaunch => "GoStmt",
            StatementKind::Deferred => "DeferStmt",
            StatementKind::Return => "ReturnStmt",
            StatementKind::Branch => "BranchStmt",
            StatementKind::Block => "BlockStmt",
            StatementKind::Switch => "SwitchStmt",
            StatementKind::TypeSwitch => "TypeSwitchStmt",
            StatementKind::CommClause => "CommClause",
            StatementKind::Select => "SelectStmt",
            StatementKind::For => "ForStmt",
            StatementKind::Range => "RangeStmt",
        }
    }

    pub fn from_go_type_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|kind| kind.go_type_name() == name)
    }
}

impl fmt::Display for StatementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identity of a statement node within one corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct StmtId {
    /// Source unit the statement belongs to
    pub unit: u32,
    /// Position among all body statements of that unit
    pub ordinal: u32,
}

impl StmtId {
    pub fn new(unit: u32, ordinal: u32) -> Self {
        Self { unit, ordinal }
    }
}

impl fmt::Display for StmtId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.unit, self.ordinal)
    }
}

/// One statement in a function body.
///
/// Owned by the corpus; classifications only hold references to it.
/// Two nodes with identical text are still distinct: identity is `id`.
#[derive(Debug)]
pub struct StatementNode {
    pub id: StmtId,

    /// Kind discovered by the syntax provider (`None` = unrecognized)
    pub kind: Option<StatementKind>,

    /// Original tree-sitter kind (for diagnostics)
    pub raw_kind: String,

    /// Source text of the statement
    pub text: String,

    pub span: Span,
}

impl StatementNode {
    pub fn new(id: StmtId, kind: Option<StatementKind>, text: impl Into<String>) -> Self {
        Self {
            id,
            kind,
            raw_kind: String::new(),
            text: text.into(),
            span: Span::zero(),
        }
    }

    pub fn with_raw_kind(mut self, raw_kind: impl Into<String>) -> Self {
        self.raw_kind = raw_kind.into();
        self
    }

    pub fn with_span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    pub fn id(&self) -> StmtId {
        self.id
    }

    pub fn kind(&self) -> Option<StatementKind> {
        self.kind
    }

    /// The statement's source text, verbatim as written
    pub fn render(&self) -> String {
        self.text.clone()
    }

    pub fn is_same(&self, other: &StatementNode) -> bool {
        self.id == other.id
    }
}
