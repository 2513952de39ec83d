//! Parsing ports (interfaces)

mod syntax_provider;

pub use syntax_provider::SyntaxProvider;
