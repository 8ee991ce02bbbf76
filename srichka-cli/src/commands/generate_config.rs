//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,

    /// Code written into the template's metadata
    #[arg(short = 'l', long, value_name = "CODE")]
    pub code: Option<String>,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating rules template...");
        println!("  Output file: {}", self.output.display());

        let template = self.generate_template();

        fs::write(&self.output, template)
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Rules template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the prefixes, clusters and spellings");
        println!("2. Validate your rules:");
        println!("   srichka validate -c {}", self.output.display());
        println!("3. Use them for splitting:");
        println!("   srichka split --rules {} дума", self.output.display());

        Ok(())
    }

    /// Built-in Bulgarian rules, with the metadata code replaced if requested
    fn generate_template(&self) -> String {
        let template = srichka_core::rules::bulgarian_toml();
        match &self.code {
            Some(code) => template.replacen("code = \"bg\"", &format!("code = \"{code}\""), 1),
            None => template.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srichka_core::RuleSet;
    use tempfile::TempDir;

    #[test]
    fn test_generate_config_args_debug() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("custom.toml"),
            code: Some("bg-dial".to_string()),
        };

        let debug_str = format!("{:?}", args);
        assert!(debug_str.contains("GenerateConfigArgs"));
        assert!(debug_str.contains("custom.toml"));
    }

    #[test]
    fn test_template_is_valid_rules() {
        let args = GenerateConfigArgs {
            output: PathBuf::from("custom.toml"),
            code: Some("bg-dial".to_string()),
        };

        let rules = RuleSet::from_toml_str(&args.generate_template()).unwrap();
        assert_eq!(rules.code(), "bg-dial");
        assert_eq!(rules.name(), "Bulgarian");
    }

    #[test]
    fn test_execute_success() {
        let temp_dir = TempDir::new().unwrap();
        let output_path = temp_dir.path().join("rules.toml");

        let args = GenerateConfigArgs {
            output: output_path.clone(),
            code: None,
        };

        assert!(args.execute().is_ok());

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert!(content.contains("code = \"bg\""));
        assert!(content.contains("[prefixes]"));
        assert!(content.contains("[clusters.split]"));
    }
}
