//! Parsing Feature
//!
//! Turns Go source into a corpus of function definitions whose bodies are
//! ordered, kind-tagged statement nodes.
//!
//! ## Structure
//! - `domain/` - StatementKind, StatementNode, FunctionDefinition, Corpus
//! - `ports/` - SyntaxProvider trait
//! - `infrastructure/` - GoSyntaxProvider (tree-sitter), CorpusLoader (walkdir)

pub mod domain;
pub mod infrastructure;
pub mod ports;

// Re-exports
pub use domain::{
    Corpus, FunctionDefinition, ParseDiagnostic, Signature, SourceUnit, StatementKind,
    StatementNode, StmtId,
};
pub use infrastructure::{CorpusLoader, GoSyntaxProvider};
pub use ports::SyntaxProvider;
