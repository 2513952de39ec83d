//! Parsing infrastructure - external dependencies

mod corpus_loader;
mod go_provider;

pub use corpus_loader::CorpusLoader;
pub use go_provider::GoSyntaxProvider;
