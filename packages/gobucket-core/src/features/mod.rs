//! Feature modules
//!
//! parsing → locator → classification

pub mod classification;
pub mod locator;
pub mod parsing;
