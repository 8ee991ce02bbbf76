//! File reading utilities

use anyhow::{Context, Result};
use std::fs;
use std::io::Read;
use std::path::Path;

/// File reader with UTF-8 validation
pub struct FileReader;

impl FileReader {
    /// Read a file as UTF-8 text
    pub fn read_text(path: &Path) -> Result<String> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;

        Ok(content)
    }

    /// Read the words of a file
    pub fn read_words(path: &Path) -> Result<Vec<String>> {
        Ok(tokenize(&Self::read_text(path)?))
    }

    /// Read the words of any reader, typically stdin
    pub fn read_words_from<R: Read>(reader: R) -> Result<Vec<String>> {
        let content = std::io::read_to_string(reader).context("Failed to read input")?;
        Ok(tokenize(&content))
    }
}

/// Split text into words.
///
/// Tokens are separated by whitespace and stripped of surrounding
/// punctuation, so only forced-break markers inside a word survive.
pub fn tokenize(text: &str) -> Vec<String> {
    text.split_whitespace()
        .map(|token| token.trim_matches(|ch: char| !ch.is_alphabetic()))
        .filter(|word| !word.is_empty())
        .map(str::to_string)
        .collect()
}
