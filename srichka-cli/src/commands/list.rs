//! List command implementation

use clap::{Subcommand, ValueEnum};
use srichka_core::RuleSet;

use super::split::OutputFormat;

/// List subcommands
#[derive(Debug, Subcommand)]
pub enum ListCommands {
    /// List the prefix catalogue in evaluation order
    Prefixes,

    /// List keep-together and split clusters
    Clusters,

    /// List available output formats
    Formats,
}

impl ListCommands {
    /// Lines to print for this listing
    pub fn render(&self, rules: &RuleSet) -> Vec<String> {
        match self {
            ListCommands::Prefixes => rules
                .prefixes()
                .entries()
                .iter()
                .map(|entry| {
                    if entry.is_compound() {
                        format!("{} ({})", entry.text(), entry.parts().join(" + "))
                    } else {
                        entry.text().to_string()
                    }
                })
                .collect(),
            ListCommands::Clusters => {
                let clusters = &rules.config().clusters;
                let mut lines = vec!["Kept together:".to_string()];
                lines.extend(clusters.keep.iter().map(|c| format!("  {c}")));
                lines.push("Split:".to_string());
                lines.extend(clusters.split.iter().map(|(cluster, &offset)| {
                    let head: String = cluster.chars().take(offset).collect();
                    let tail: String = cluster.chars().skip(offset).collect();
                    format!("  {cluster} -> {head}-{tail}")
                }));
                lines
            }
            ListCommands::Formats => OutputFormat::value_variants()
                .iter()
                .filter_map(|format| format.to_possible_value())
                .map(|value| match value.get_help() {
                    Some(help) => format!("{} - {}", value.get_name(), help),
                    None => value.get_name().to_string(),
                })
                .collect(),
        }
    }

    /// Execute the list command
    pub fn execute(&self, rules: &RuleSet) {
        for line in self.render(rules) {
            println!("{line}");
        }
    }
}
