//! CLI command implementations

use clap::Subcommand;

pub mod contour;
pub mod generate_config;
pub mod list;
pub mod split;
pub mod validate;

pub use list::ListCommands;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Split words into syllables
    Split(split::SplitArgs),

    /// Print the sonority contour of words
    Contour(contour::ContourArgs),

    /// Validate a rule file
    Validate(validate::ValidateArgs),

    /// Write the built-in rules as a template for a custom rule file
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// List built-in rules and formats
    List {
        #[command(subcommand)]
        subcommand: ListCommands,
    },
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Split(args) => args.execute(),
            Commands::Contour(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::List { subcommand } => {
                subcommand.execute(&srichka_core::rules::bulgarian());
                Ok(())
            }
        }
    }
}
