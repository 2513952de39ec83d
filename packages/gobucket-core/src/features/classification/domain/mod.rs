//! Classification domain models

mod classification;

pub use classification::Classification;
