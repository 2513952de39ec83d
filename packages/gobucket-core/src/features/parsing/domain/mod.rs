//! Parsing domain models

mod corpus;
mod function;
mod statement;

pub use corpus::{Corpus, ParseDiagnostic, SourceUnit};
pub use function::{FunctionDefinition, Signature};
pub use statement::{StatementKind, StatementNode, StmtId};
