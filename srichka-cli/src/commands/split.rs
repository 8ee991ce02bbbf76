//! Split command implementation

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, FileReader};
use crate::output::{JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use srichka_core::Syllabifier;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Arguments for the split command
#[derive(Debug, Args)]
pub struct SplitArgs {
    /// Words to split; read from stdin when neither words nor files are given
    #[arg(value_name = "WORDS")]
    pub words: Vec<String>,

    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN")]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format [default: text]
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Text placed between syllables [default: -]
    #[arg(short, long, value_name = "TEXT")]
    pub separator: Option<String>,

    /// Rule file replacing the built-in Bulgarian rules
    #[arg(short, long, value_name = "FILE", env = "SRICHKA_RULES")]
    pub rules: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `word --> syl-la-bles` line per word
    Text,
    /// JSON array of words with syllables and boundaries
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from a configuration file
    pub fn from_name(name: &str) -> Result<Self> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")).into())
    }
}

/// Flags merged with the configuration file
#[derive(Debug)]
struct Settings {
    format: OutputFormat,
    separator: String,
    pretty_json: bool,
    rules: Option<PathBuf>,
}

impl SplitArgs {
    /// Execute the split command
    pub fn execute(&self) -> Result<()> {
        crate::init_logging(self.verbose, self.quiet);

        log::info!("Starting syllabification");
        log::debug!("Arguments: {self:?}");

        let settings = self.settings()?;
        let rules = crate::load_rules(settings.rules.as_deref())?;
        log::info!("Using {} rules ({})", rules.name(), rules.code());
        let syllabifier = Syllabifier::with_rules(rules);

        let words = self.collect_words()?;
        log::info!("Syllabifying {} words", words.len());

        let analyses = syllabifier.analyze_batch(&words);

        let writer: Box<dyn Write + Send + Sync> = match &self.output {
            Some(path) => Box::new(BufWriter::new(File::create(path).with_context(|| {
                format!("Failed to create output file: {}", path.display())
            })?)),
            None => Box::new(io::stdout()),
        };
        let mut formatter = create_formatter(&settings, writer);

        for (word, analysis) in words.iter().zip(&analyses) {
            formatter.format_word(word, analysis)?;
        }
        formatter.finish()?;

        Ok(())
    }

    fn settings(&self) -> Result<Settings> {
        let config = match &self.config {
            Some(path) => CliConfig::from_file(path)?,
            None => CliConfig::default(),
        };

        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)?,
        };

        Ok(Settings {
            format,
            separator: self
                .separator
                .clone()
                .unwrap_or(config.output.separator),
            pretty_json: config.output.pretty_json,
            rules: self.rules.clone().or(config.rules.path),
        })
    }

    fn collect_words(&self) -> Result<Vec<String>> {
        let mut words = self.words.clone();

        if !self.input.is_empty() {
            let files = resolve_patterns(&self.input)?;
            let mut progress = ProgressReporter::new(self.quiet);
            if files.len() > 1 {
                progress.init_files(files.len() as u64);
            }

            for path in &files {
                let file_words = FileReader::read_words(path)?;
                log::debug!("{}: {} words", path.display(), file_words.len());
                progress.file_completed(&path.display().to_string(), file_words.len());
                words.extend(file_words);
            }
            progress.finish();
        } else if words.is_empty() {
            words = FileReader::read_words_from(io::stdin().lock())?;
        }

        Ok(words)
    }
}

fn create_formatter(
    settings: &Settings,
    writer: Box<dyn Write + Send + Sync>,
) -> Box<dyn OutputFormatter> {
    match settings.format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer, settings.separator.as_str())),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, settings.pretty_json)),
        OutputFormat::Markdown => {
            Box::new(MarkdownFormatter::new(writer, settings.separator.as_str()))
        }
    }
}
