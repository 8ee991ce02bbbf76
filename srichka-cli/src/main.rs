//! srichka command-line entry point

use anyhow::Result;
use clap::Parser;
use srichka_cli::commands::Commands;

/// Syllabification of Bulgarian words
#[derive(Debug, Parser)]
#[command(name = "srichka", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.command.execute()
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_split() {
        let cli = Cli::try_parse_from(["srichka", "split", "-f", "json", "-s", "|", "сестра"]).unwrap();
        match cli.command {
            Commands::Split(args) => {
                assert_eq!(args.words, vec!["сестра"]);
                assert_eq!(args.separator.as_deref(), Some("|"));
            }
            other => panic!("expected split, got {other:?}"),
        }
    }
}
