//! Output formatting module

use anyhow::Result;
use srichka_core::Syllabification;

/// Trait for output formatters
pub trait OutputFormatter: Send + Sync {
    /// Format and output one syllabified word
    fn format_word(&mut self, word: &str, analysis: &Syllabification) -> Result<()>;

    /// Finalize output (e.g., close JSON array)
    fn finish(&mut self) -> Result<()>;
}

pub mod json;
pub mod markdown;
pub mod text;

pub use json::JsonFormatter;
pub use markdown::MarkdownFormatter;
pub use text::TextFormatter;
