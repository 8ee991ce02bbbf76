//! srichka CLI library
//!
//! This library provides the command-line interface for the srichka
//! Bulgarian syllabifier.

pub mod commands;
pub mod config;
pub mod error;
pub mod input;
pub mod output;
pub mod progress;

pub use error::{CliError, CliResult};

use srichka_core::RuleSet;
use std::path::Path;
use std::sync::Arc;

/// Built-in rules, or the rule file at `path` when one is given
pub fn load_rules(path: Option<&Path>) -> CliResult<Arc<RuleSet>> {
    match path {
        Some(path) => {
            log::info!("Loading rules from {}", path.display());
            let rules = RuleSet::from_file(path)
                .map_err(|e| CliError::RulesError(format!("{}: {e}", path.display())))?;
            Ok(Arc::new(rules))
        }
        None => Ok(srichka_core::rules::bulgarian()),
    }
}

/// Initialize logging based on verbosity level
pub fn init_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let log_level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    // Keeps any logger that is already installed
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_builtin_rules() {
        let rules = load_rules(None).unwrap();
        assert_eq!(rules.code(), "bg");
    }

    #[test]
    fn test_load_invalid_rules_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("bad.toml");
        fs::write(&path, "[metadata]\ncode = \"x\"\nname = \"X\"\n[prefixes]\nsimple = [\"пре\"]").unwrap();

        let err = load_rules(Some(&path)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CliError>(),
            Some(CliError::RulesError(_))
        ));
    }
}
