//! Embedded rule tables
//!
//! The Bulgarian rules ship inside the binary and are parsed once.

use crate::rules::runtime::RuleSet;
use std::sync::{Arc, OnceLock};

const BULGARIAN_TOML: &str = include_str!("../../configs/bulgarian.toml");

static BULGARIAN: OnceLock<Arc<RuleSet>> = OnceLock::new();

/// Built-in Bulgarian rules.
///
/// # Panics
///
/// If the embedded tables fail validation. That is a bug in the shipped
/// data, never something a caller's input can trigger.
pub fn bulgarian() -> Arc<RuleSet> {
    BULGARIAN
        .get_or_init(|| {
            let rules = RuleSet::from_toml_str(BULGARIAN_TOML)
                .unwrap_or_else(|e| panic!("embedded Bulgarian rules are invalid: {e}"));
            log::debug!(
                "Loaded {} rules: {} prefixes, {} kept clusters, {} split clusters",
                rules.code(),
                rules.prefixes().len(),
                rules.clusters().keep_count(),
                rules.clusters().split_count()
            );
            Arc::new(rules)
        })
        .clone()
}

/// TOML source of the built-in rules, usable as a template
pub fn bulgarian_toml() -> &'static str {
    BULGARIAN_TOML
}
