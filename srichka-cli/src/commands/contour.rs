//! Contour command implementation

use anyhow::Result;
use clap::Args;
use std::io::{self, Write};

/// Arguments for the contour command
#[derive(Debug, Args)]
pub struct ContourArgs {
    /// Words to print sonority ranks for
    #[arg(value_name = "WORDS", required = true)]
    pub words: Vec<String>,
}

impl ContourArgs {
    /// Execute the contour command
    pub fn execute(&self) -> Result<()> {
        let mut stdout = io::stdout().lock();
        for word in &self.words {
            writeln!(stdout, "{}", contour_line(word))?;
        }
        stdout.flush()?;
        Ok(())
    }
}

/// `word --> ranks` for one word, ranks written as digits
pub fn contour_line(word: &str) -> String {
    let normalized = word.trim().to_lowercase();
    let ranks: String = srichka_core::sonority_contour(&normalized, 0, usize::MAX)
        .iter()
        .map(|rank| rank.to_string())
        .collect();
    format!("{} --> {}", word.trim(), ranks)
}
