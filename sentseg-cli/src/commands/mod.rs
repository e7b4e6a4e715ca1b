//! CLI command implementations

use anyhow::Result;
use clap::Subcommand;

pub mod generate_config;
pub mod inspect;
pub mod process;
pub mod validate;
pub mod weight;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Segment text files into weight-budgeted chunks
    Process(process::ProcessArgs),

    /// Segment stdin line by line and show the weight of every chunk
    Inspect(inspect::InspectArgs),

    /// Print the speech weight of a text
    Weight(weight::WeightArgs),

    /// Generate a configuration template
    GenerateConfig(generate_config::GenerateConfigArgs),

    /// Validate a configuration file
    Validate(validate::ValidateArgs),
}

impl Commands {
    /// Run the selected command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        match self {
            Commands::Process(args) => args.execute(quiet),
            Commands::Inspect(args) => args.execute(),
            Commands::Weight(args) => args.execute(),
            Commands::GenerateConfig(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
        }
    }
}
