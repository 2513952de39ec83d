//! Tool configuration schema (YAML v1)

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::error::{ConfigError, ConfigResult};
use crate::logging::{LogFormat, LogLevel};

/// Schema versions this build understands
pub const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Corpus discovery and parsing options
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoaderConfig {
    /// File extensions to parse (without the dot)
    pub extensions: Vec<String>,
    /// Directory names pruned from the walk
    pub skip_dirs: Vec<String>,
    /// Prune directories whose name starts with '.'
    pub skip_hidden: bool,
    /// Keep files with syntax errors; their bad statements classify as malformed
    pub allow_malformed: bool,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            extensions: vec!["go".to_string()],
            skip_dirs: Vec::new(),
            skip_hidden: true,
            allow_malformed: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    pub level: LogLevel,
    pub format: LogFormat,
}

/// Complete tool configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ToolConfig {
    /// Schema version (required in files)
    #[serde(default)]
    pub version: Option<u32>,

    /// Report every located function on stderr
    #[serde(default)]
    pub verbose: bool,

    #[serde(default)]
    pub loader: LoaderConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            version: Some(1),
            verbose: false,
            loader: LoaderConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl ToolConfig {
    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let config: ToolConfig = serde_yaml::from_str(content)?;

        match config.version {
            None => return Err(ConfigError::MissingVersion),
            Some(found) if !SUPPORTED_VERSIONS.contains(&found) => {
                return Err(ConfigError::UnsupportedVersion {
                    found,
                    supported: SUPPORTED_VERSIONS.to_vec(),
                })
            }
            Some(_) => {}
        }

        config.validate()?;
        Ok(config)
    }

    pub fn to_yaml(&self) -> ConfigResult<String> {
        Ok(serde_yaml::to_string(self)?)
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.loader.extensions.is_empty() {
            return Err(ConfigError::invalid(
                "loader.extensions",
                "at least one extension is required, e.g. [go]",
            ));
        }
        if let Some(ext) = self
            .loader
            .extensions
            .iter()
            .find(|ext| ext.is_empty() || ext.starts_with('.'))
        {
            return Err(ConfigError::invalid(
                "loader.extensions",
                format!("'{}' must be a bare extension without a dot", ext),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_defaults() {
        let config = ToolConfig::default();
        assert_eq!(config.loader.extensions, vec!["go".to_string()]);
        assert!(config.loader.skip_hidden);
        assert!(!config.loader.allow_malformed);
        assert_eq!(config.logging.level, LogLevel::Warn);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_loading() {
        let yaml_content = r#"
version: 1
verbose: true
loader:
  skip_dirs: [vendor, testdata]
  allow_malformed: true
logging:
  level: debug
  format: json
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(yaml_content.as_bytes()).unwrap();

        let config = ToolConfig::from_yaml(temp_file.path()).unwrap();
        assert!(config.verbose);
        assert_eq!(config.loader.skip_dirs, vec!["vendor", "testdata"]);
        assert_eq!(config.loader.extensions, vec!["go"]);
        assert!(config.loader.allow_malformed);
        assert_eq!(config.logging.level, LogLevel::Debug);
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn test_yaml_missing_version() {
        let err = ToolConfig::from_yaml_str("verbose: true\n").unwrap_err();
        assert!(matches!(err, ConfigError::MissingVersion));
    }

    #[test]
    fn test_yaml_unsupported_version() {
        let err = ToolConfig::from_yaml_str("version: 2\n").unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedVersion { found: 2, .. }));
    }

    #[test]
    fn test_yaml_unknown_field_rejected() {
        let err = ToolConfig::from_yaml_str("version: 1\nloader:\n  extension: [go]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_dotted_extension_rejected() {
        let err = ToolConfig::from_yaml_str("version: 1\nloader:\n  extensions: [.go]\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { .. }));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = ToolConfig::default();
        config.loader.skip_dirs.push("vendor".to_string());

        let yaml = config.to_yaml().unwrap();
        assert!(yaml.contains("version: 1"));
        assert_eq!(ToolConfig::from_yaml_str(&yaml).unwrap(), config);
    }
}
