//! Shared models

mod error;
mod span;

pub use error::{BucketError, ErrorKind, Result};
pub use span::Span;
