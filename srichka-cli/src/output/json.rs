//! JSON output formatter

use super::OutputFormatter;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use srichka_core::{Boundary, Syllabification};
use std::io::Write;

/// JSON formatter - outputs words as a JSON array
pub struct JsonFormatter<W: Write> {
    writer: W,
    pretty: bool,
    words: Vec<WordData>,
}

/// Data structure for JSON output
#[derive(Debug, Serialize, Deserialize)]
pub struct WordData {
    /// The word as given
    pub word: String,
    /// Its syllables
    pub syllables: Vec<String>,
    /// Internal boundaries with the rule that placed each
    pub boundaries: Vec<Boundary>,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter
    pub fn new(writer: W, pretty: bool) -> Self {
        Self {
            writer,
            pretty,
            words: Vec::new(),
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for JsonFormatter<W> {
    fn format_word(&mut self, word: &str, analysis: &Syllabification) -> Result<()> {
        self.words.push(WordData {
            word: word.trim().to_string(),
            syllables: analysis.syllables.clone(),
            boundaries: analysis.boundaries.clone(),
        });
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        if self.pretty {
            serde_json::to_writer_pretty(&mut self.writer, &self.words)?;
        } else {
            serde_json::to_writer(&mut self.writer, &self.words)?;
        }
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}
