//! sentseg command-line entry point

use anyhow::Result;
use clap::Parser;
use sentseg_cli::commands::Commands;

/// Weight-budgeted text segmentation for speech synthesis
#[derive(Debug, Parser)]
#[command(name = "sentseg", version, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress logs and progress output
    #[arg(short, long, global = true)]
    quiet: bool,
}

impl Cli {
    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    cli.init_logging();
    cli.command.execute(cli.quiet)
}
