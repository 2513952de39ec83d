//! Tool configuration
//!
//! Defaults, optionally overridden by a versioned YAML file, optionally
//! overridden again by command-line flags.
//!
//! # Examples
//!
//! ```rust,ignore
//! use gobucket_core::config::ToolConfig;
//!
//! let config = ToolConfig::from_yaml("gobucket.yaml")?;
//! assert_eq!(config.loader.extensions, vec!["go"]);
//! ```

pub mod error;
pub mod tool_config;

// Re-exports
pub use error::{ConfigError, ConfigResult};
pub use tool_config::{LoaderConfig, LoggingConfig, ToolConfig, SUPPORTED_VERSIONS};
