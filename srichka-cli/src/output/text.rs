//! Plain text output formatter

use super::OutputFormatter;
use anyhow::Result;
use srichka_core::Syllabification;
use std::io::{self, Write};

/// Plain text formatter - outputs `word --> syl-la-bles`, one word per line
pub struct TextFormatter<W: Write> {
    writer: W,
    separator: String,
}

impl<W: Write> TextFormatter<W> {
    /// Create a new text formatter
    pub fn new(writer: W, separator: impl Into<String>) -> Self {
        Self {
            writer,
            separator: separator.into(),
        }
    }
}

impl TextFormatter<io::Stdout> {
    /// Create a formatter that writes to stdout
    pub fn stdout(separator: impl Into<String>) -> Self {
        Self::new(io::stdout(), separator)
    }
}

impl<W: Write + Send + Sync> OutputFormatter for TextFormatter<W> {
    fn format_word(&mut self, word: &str, analysis: &Syllabification) -> Result<()> {
        writeln!(
            self.writer,
            "{} --> {}",
            word.trim(),
            analysis.joined(&self.separator)
        )?;
        Ok(())
    }

    fn finish(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use srichka_core::Syllabifier;

    #[test]
    fn test_text_lines() {
        let syllabifier = Syllabifier::new();
        let mut buffer = Vec::new();
        {
            let mut formatter = TextFormatter::new(&mut buffer, "-");
            for word in ["Сестра", "принц"] {
                formatter
                    .format_word(word, &syllabifier.analyze(word))
                    .unwrap();
            }
            formatter.finish().unwrap();
        }

        let output = String::from_utf8(buffer).unwrap();
        assert_eq!(output, "Сестра --> се-стра\nпринц --> принц\n");
    }

    #[test]
    fn test_custom_separator() {
        let mut buffer = Vec::new();
        let mut formatter = TextFormatter::new(&mut buffer, "·");
        formatter
            .format_word("барабан", &Syllabifier::new().analyze("барабан"))
            .unwrap();
        drop(formatter);

        assert_eq!(String::from_utf8(buffer).unwrap(), "барабан --> ба·ра·бан\n");
    }
}
