//! Configuration module
//!
//! Optional TOML file with defaults for the `split` command. Command-line
//! flags always win over values given here.

use crate::error::CliError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// CLI configuration structure
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Rule table configuration
    #[serde(default)]
    pub rules: RulesSection,
}

/// Output-related configuration
#[derive(Debug, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Text placed between syllables
    pub separator: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            separator: "-".to_string(),
            pretty_json: true,
        }
    }
}

/// Rule table configuration
#[derive(Debug, Deserialize, Serialize, Default)]
pub struct RulesSection {
    /// Rule file to use instead of the built-in Bulgarian rules
    pub path: Option<PathBuf>,
}

impl CliConfig {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::ConfigError(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config = toml::from_str(content).map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::default();
        assert_eq!(config.output.default_format, "text");
        assert_eq!(config.output.separator, "-");
        assert!(config.output.pretty_json);
        assert!(config.rules.path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let config = CliConfig::from_toml_str(
            r#"
[output]
separator = "·"
"#,
        )
        .unwrap();
        assert_eq!(config.output.separator, "·");
        assert_eq!(config.output.default_format, "text");
    }

    #[test]
    fn test_rules_path() {
        let config = CliConfig::from_toml_str("[rules]\npath = \"rules/custom.toml\"").unwrap();
        assert_eq!(config.rules.path, Some(PathBuf::from("rules/custom.toml")));
    }

    #[test]
    fn test_malformed_config() {
        let err = CliConfig::from_toml_str("[output\nseparator = 1").unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::ConfigError(_))
        ));
    }

    #[test]
    fn test_missing_file() {
        let err = CliConfig::from_file(Path::new("/nonexistent/srichka.toml")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/srichka.toml"));
    }
}
