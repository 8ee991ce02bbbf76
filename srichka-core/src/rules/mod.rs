//! Data-driven rule tables
//!
//! Prefixes, cluster exceptions and loanword spellings are configuration,
//! loaded from TOML and validated once. Letter classes and sonority ranks
//! are fixed in code.

pub mod config;
pub mod loader;
pub mod runtime;
pub mod tables;

pub use config::RulesConfig;
pub use loader::{bulgarian, bulgarian_toml};
pub use runtime::RuleSet;
pub use tables::{ClusterTable, SpellingTable};
