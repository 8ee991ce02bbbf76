//! Markdown output formatter

use super::OutputFormatter;
use anyhow::Result;
use srichka_core::Syllabification;
use std::io::Write;

/// Markdown formatter - outputs words as a numbered list
pub struct MarkdownFormatter<W: Write> {
    writer: W,
    separator: String,
    word_count: usize,
}

impl<W: Write> MarkdownFormatter<W> {
    /// Create a new markdown formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
            word_count: 0,
        }
    }
}

impl<W: Write + Send + Sync> OutputFormatter for MarkdownFormatter<W> {
    fn format_word(&mut self, word: &str, analysis: &Syllabification) -> Result<()> {
        self.word_count += 1;
        writeln!(
            self.writer,
            "{}. **{}**: {}",
            self.word_count,
            word.trim(),
            analysis.joined(&self.separator)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        writeln!(self.writer, "---")?;
        writeln!(self.writer, "*Total words: {}*", self.word_count)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srichka_core::Syllabifier;

    #[test]
    fn test_markdown_list() {
        let syllabifier = Syllabifier::new();
        let mut buffer = Vec::new();
        {
            let mut formatter = MarkdownFormatter::new(&mut buffer, "-");
            for word in ["ами", "нощница"] {
                formatter
                    .format_word(word, &syllabifier.analyze(word))
                    .unwrap();
            }
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert!(output.starts_with("1. **ами**: а-ми\n2. **нощница**: нощ-ни-ца\n"));
        assert!(output.ends_with("*Total words: 2*\n"));
    }
}
