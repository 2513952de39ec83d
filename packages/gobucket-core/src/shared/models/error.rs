//! Error types for the gobucket-core crate
//!
//! One error type for every stage: loading, parsing, name validation,
//! lookup and configuration. Local failures (a missing function) are not
//! errors at all; they surface as `None` in batch results.

use std::fmt;

/// Error kind categorization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Source text could not be parsed
    Parse,
    /// Reading files or walking directories failed
    IO,
    /// Invalid invocation (e.g. no function names given)
    Usage,
    /// Access to a function that was not found
    Lookup,
    /// Configuration errors
    Config,
    /// Internal errors (bugs)
    Internal,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Parse => "parse",
            ErrorKind::IO => "io",
            ErrorKind::Usage => "usage",
            ErrorKind::Lookup => "lookup",
            ErrorKind::Config => "config",
            ErrorKind::Internal => "internal",
        }
    }
}

/// Unified error type
#[derive(Debug)]
pub struct BucketError {
    pub kind: ErrorKind,
    pub message: String,
    pub file_path: Option<String>,
    pub line: Option<u32>,
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl BucketError {
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            file_path: None,
            line: None,
            source: None,
        }
    }

    pub fn with_file(mut self, file_path: impl Into<String>) -> Self {
        self.file_path = Some(file_path.into());
        self
    }

    pub fn with_line(mut self, line: u32) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    // Convenience constructors
    pub fn parse(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Parse, message)
    }

    pub fn io(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::IO, message)
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Usage, message)
    }

    pub fn lookup(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Lookup, message)
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Config, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal, message)
    }

    pub fn is_usage(&self) -> bool {
        self.kind == ErrorKind::Usage
    }
}

impl fmt::Display for BucketError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.kind.as_str(), self.message)?;
        if let Some(ref file) = self.file_path {
            write!(f, " in {}", file)?;
            if let Some(line) = self.line {
                write!(f, ":{}", line)?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for BucketError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.source
            .as_ref()
            .map(|e| e.as_ref() as &(dyn std::error::Error + 'static))
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, BucketError>;

impl From<std::io::Error> for BucketError {
    fn from(err: std::io::Error) -> Self {
        BucketError::io(format!("IO error: {}", err)).with_source(err)
    }
}

impl From<walkdir::Error> for BucketError {
    fn from(err: walkdir::Error) -> Self {
        let mut error = BucketError::io(format!("Walk error: {}", err));
        if let Some(path) = err.path() {
            error = error.with_file(path.display().to_string());
        }
        error.with_source(err)
    }
}

impl From<serde_json::Error> for BucketError {
    fn from(err: serde_json::Error) -> Self {
        BucketError::internal(format!("JSON serialization error: {}", err)).with_source(err)
    }
}

impl From<crate::config::ConfigError> for BucketError {
    fn from(err: crate::config::ConfigError) -> Self {
        BucketError::config(err.to_string()).with_source(err)
    }
}
