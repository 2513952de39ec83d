//! Function Locator Feature
//!
//! Validates requested function names and finds their definitions in a corpus.

mod function_locator;
mod name_list;

pub use function_locator::{FunctionLocator, FunctionLookup};
pub use name_list::validate_names;
