//! Generate config command implementation

use anyhow::{Context, Result};
use clap::Args;
use sentseg_core::boundary::patterns;
use std::path::PathBuf;

/// Arguments for the generate-config command
#[derive(Debug, Args)]
pub struct GenerateConfigArgs {
    /// Output file path
    #[arg(short, long, value_name = "FILE", required = true)]
    pub output: PathBuf,
}

impl GenerateConfigArgs {
    /// Execute the generate-config command
    pub fn execute(&self) -> Result<()> {
        use std::fs;

        println!("Generating configuration template...");
        println!("  Output file: {}", self.output.display());

        fs::write(&self.output, generate_template())
            .with_context(|| format!("Failed to write to {}", self.output.display()))?;

        println!("✓ Configuration template generated successfully!");
        println!();
        println!("Next steps:");
        println!("1. Edit the budget, weights and boundary patterns");
        println!("2. Validate your configuration:");
        println!("   sentseg validate --config {}", self.output.display());
        println!("3. Use it for processing:");
        println!(
            "   sentseg process -i input.txt --config {}",
            self.output.display()
        );

        Ok(())
    }
}

/// Commented TOML template holding every setting at its default
pub fn generate_template() -> String {
    format!(
        r#"# sentseg configuration

[segmentation]
# Weight budget per chunk
max_len = 50.0
# Keep splitting clauses that are still over budget
force = true

[segmentation.weight]
# Weight of a multi-letter ASCII word
latin_word_weight = 2.5
# Fixed weight for other multi-character units (default: character count)
# other_weight = 1.0

[segmentation.patterns]
# Uncomment to override the boundary regexes, one per tier
# sentence = '{sentence}'
# clause = '{clause}'
# generic = '{generic}'

[output]
# text, json or markdown
default_format = "text"
pretty_json = true

[performance]
# Worker threads for --parallel (0 = number of CPUs)
worker_threads = 0
"#,
        sentence = patterns::SENTENCE,
        clause = patterns::CLAUSE,
        generic = patterns::GENERIC,
    )
}
