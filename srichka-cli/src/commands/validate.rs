//! Validate command implementation

use anyhow::Result;
use clap::Args;
use srichka_core::RuleSet;
use std::path::PathBuf;

/// Arguments for the validate command
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Path to the rule file to validate
    #[arg(short = 'c', long = "rules-config", value_name = "FILE", required = true)]
    pub rules_config: PathBuf,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        println!("Validating rules: {}", self.rules_config.display());

        match RuleSet::from_file(&self.rules_config) {
            Ok(rules) => {
                println!("✓ Rules are valid!");
                println!("  Code: {}", rules.code());
                println!("  Name: {}", rules.name());
                println!("  Prefixes: {}", rules.prefixes().len());
                println!("  Kept clusters: {}", rules.clusters().keep_count());
                println!("  Split clusters: {}", rules.clusters().split_count());
                println!("  Spellings: {}", rules.spellings().len());
                Ok(())
            }
            Err(e) => {
                println!("✗ Rules are invalid!");
                println!("  Error: {e}");
                Err(anyhow::anyhow!("Validation failed: {}", e))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_args_debug() {
        let args = ValidateArgs {
            rules_config: PathBuf::from("rules.toml"),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("ValidateArgs"));
        assert!(debug_str.contains("rules.toml"));
    }

    #[test]
    fn test_validate_embedded_rules() {
        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", srichka_core::rules::bulgarian_toml()).unwrap();

        let args = ValidateArgs {
            rules_config: temp_file.path().to_path_buf(),
        };

        assert!(args.execute().is_ok());
    }

    #[test]
    fn test_validate_invalid_rules() {
        let toml_content = r#"
[metadata]
code = "test"
name = "Test"

[prefixes]
simple = ["раз", "разд"]
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        write!(temp_file, "{}", toml_content).unwrap();

        let args = ValidateArgs {
            rules_config: temp_file.path().to_path_buf(),
        };

        let err = args.execute().unwrap_err();
        assert!(err.to_string().contains("not nested"));
    }
}
