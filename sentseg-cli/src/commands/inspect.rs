//! Inspect command implementation
//!
//! Reads lines from stdin and prints each line with its weight, followed by
//! its numbered chunks, for tuning budgets by eye.

use super::process::load_config;
use crate::error::CliError;
use anyhow::Result;
use clap::Args;
use sentseg_core::Segmenter;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Arguments for the inspect command
#[derive(Debug, Args)]
pub struct InspectArgs {
    /// Weight budget per chunk
    #[arg(short, long, value_name = "WEIGHT", default_value_t = 10.0)]
    pub max_len: f64,

    /// Accept over-budget clauses instead of splitting them further
    #[arg(long)]
    pub no_force: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl InspectArgs {
    /// Execute the inspect command
    pub fn execute(&self) -> Result<()> {
        let segmenter = self.build_segmenter()?;
        let stdin = io::stdin();
        let stdout = io::stdout();
        self.run(&segmenter, stdin.lock(), stdout.lock())
    }

    fn build_segmenter(&self) -> Result<Segmenter> {
        let mut segmentation = load_config(self.config.as_deref())?.segmentation;
        segmentation.max_len = self.max_len;
        segmentation.force = !self.no_force;
        Ok(Segmenter::with_config(segmentation).map_err(CliError::from)?)
    }

    /// Write `0(=W):line` for each input line, then `i(=W):chunk` per chunk
    ///
    /// Weights use the shortest form of the number, so whole weights print
    /// without a fraction (`5`, not `5.0`) and others keep theirs (`7.5`).
    pub fn run<R: BufRead, W: Write>(
        &self,
        segmenter: &Segmenter,
        reader: R,
        mut writer: W,
    ) -> Result<()> {
        for line in reader.lines() {
            let line = line?;
            let line = line.trim_end_matches('\r');
            writeln!(writer, "0(={}):{}", segmenter.weight_of(line), line)?;
            for (i, chunk) in segmenter.segment(line).enumerate() {
                writeln!(writer, "{}(={}):{}", i + 1, segmenter.weight_of(chunk), chunk)?;
            }
            writer.flush()?;
        }
        Ok(())
    }
}
