//! Runtime rule set
//!
//! Bridges the TOML configuration and the tables the syllabifier queries.

use crate::error::{Result, RulesError};
use crate::prefix::PrefixCatalogue;
use crate::rules::config::RulesConfig;
use crate::rules::tables::{ClusterTable, SpellingTable};
use std::path::Path;

/// Validated, read-only rule tables
#[derive(Debug, Clone)]
pub struct RuleSet {
    config: RulesConfig,
    prefixes: PrefixCatalogue,
    clusters: ClusterTable,
    spellings: SpellingTable,
}

impl RuleSet {
    /// Create from configuration
    pub fn from_config(config: RulesConfig) -> Result<Self> {
        let prefixes = PrefixCatalogue::new(
            &config.prefixes.simple,
            &config.prefixes.leading,
            &config.prefixes.compound,
        )?;

        let spellings = SpellingTable::new(config.spelling.iter().map(|s| (s.letter, s.written)))?;

        // Clusters may name respelled letters, so spellings come first
        let clusters = ClusterTable::new(&config.clusters.keep, &config.clusters.split, &spellings)?;

        Ok(Self {
            config,
            prefixes,
            clusters,
            spellings,
        })
    }

    /// Parse and validate TOML text
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        Self::from_config(RulesConfig::from_toml_str(toml_str)?)
    }

    /// Load and validate a rule file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| RulesError::Io {
            path: path.display().to_string(),
            source,
        })?;

        Self::from_toml_str(&content)
    }

    pub fn code(&self) -> &str {
        &self.config.metadata.code
    }

    pub fn name(&self) -> &str {
        &self.config.metadata.name
    }

    /// Source configuration
    pub fn config(&self) -> &RulesConfig {
        &self.config
    }

    pub fn prefixes(&self) -> &PrefixCatalogue {
        &self.prefixes
    }

    pub fn clusters(&self) -> &ClusterTable {
        &self.clusters
    }

    pub fn spellings(&self) -> &SpellingTable {
        &self.spellings
    }
}
