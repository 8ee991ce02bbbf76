//! Configuration structures
//!
//! This module defines the TOML schema for syllabification rule tables.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Root rule configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulesConfig {
    pub metadata: Metadata,
    #[serde(default)]
    pub prefixes: Prefixes,
    #[serde(default)]
    pub clusters: Clusters,
    #[serde(default)]
    pub spelling: Vec<Spelling>,
}

/// Rule set metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Metadata {
    pub code: String,
    pub name: String,
}

/// Morphological prefixes
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Prefixes {
    /// Prefixes that may stand alone at the start of a word
    #[serde(default)]
    pub simple: Vec<String>,
    /// Prefixes that only matter stacked in front of another one
    #[serde(default)]
    pub leading: Vec<String>,
    /// Stacked prefixes, each given as its parts
    #[serde(default)]
    pub compound: Vec<Vec<String>>,
}

/// Consonant clusters that override the sonority rule
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Clusters {
    /// Always the onset of the next syllable as a whole
    #[serde(default)]
    pub keep: Vec<String>,
    /// Cluster text to zero-based break offset
    #[serde(default)]
    pub split: BTreeMap<String, usize>,
}

/// Alternate spelling rewritten in the output
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Spelling {
    pub letter: char,
    pub written: char,
}

impl RulesConfig {
    /// Parse from TOML text
    pub fn from_toml_str(toml_str: &str) -> crate::error::Result<Self> {
        Ok(toml::from_str(toml_str)?)
    }
}
