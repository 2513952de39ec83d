//! Usecase layer

mod parse_functions;

pub use parse_functions::{FunctionStatements, ParseFunctionsUseCase, ParsedFunction};
