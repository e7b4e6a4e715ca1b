//! Process command implementation
//!
//! Each input line is segmented on its own with the configured budget, and
//! every chunk that is not blank after trimming becomes one output record.

use crate::config::CliConfig;
use crate::error::CliError;
use crate::input::{resolve_patterns, split_lines, FileReader};
use crate::output::{ChunkRecord, JsonFormatter, MarkdownFormatter, OutputFormatter, TextFormatter};
use crate::progress::ProgressReporter;
use anyhow::{Context, Result};
use clap::{Args, ValueEnum};
use rayon::prelude::*;
use sentseg_core::Segmenter;
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Arguments for the process command
#[derive(Debug, Args)]
pub struct ProcessArgs {
    /// Input files or patterns (supports glob)
    #[arg(short, long, value_name = "FILE/PATTERN", required = true)]
    pub input: Vec<String>,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Output format (default: from config, else text)
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Weight budget per chunk
    #[arg(short, long, value_name = "WEIGHT")]
    pub max_len: Option<f64>,

    /// Accept over-budget clauses instead of splitting them further
    #[arg(long)]
    pub no_force: bool,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Process files in parallel
    #[arg(short, long)]
    pub parallel: bool,

    /// Number of worker threads for parallel processing
    #[arg(short, long, value_name = "N")]
    pub threads: Option<usize>,
}

/// Supported output formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Plain text with one chunk per line
    Text,
    /// JSON array of chunks with offset, weight and tier
    Json,
    /// Markdown numbered list
    Markdown,
}

impl OutputFormat {
    /// Parse a format name from the config file
    pub fn from_name(name: &str) -> Result<Self, CliError> {
        <Self as ValueEnum>::from_str(name, true)
            .map_err(|_| CliError::ConfigError(format!("unknown output format '{name}'")))
    }
}

impl ProcessArgs {
    /// Execute the process command
    pub fn execute(&self, quiet: bool) -> Result<()> {
        log::info!("Starting text processing");
        log::debug!("Arguments: {:?}", self);

        let config = load_config(self.config.as_deref())?;
        let segmenter = self.build_segmenter(&config)?;
        let format = match self.format {
            Some(format) => format,
            None => OutputFormat::from_name(&config.output.default_format)?,
        };

        let files = resolve_patterns(&self.input)?;
        log::info!("Resolved {} input file(s)", files.len());

        let mut formatter = self.create_formatter(format, config.output.pretty_json)?;
        let mut progress = ProgressReporter::new(quiet);
        progress.init_files(files.len() as u64);

        if self.parallel && files.len() > 1 {
            let threads = self.worker_threads(&config);
            log::info!("Processing in parallel on {threads} thread(s)");
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .context("Failed to build thread pool")?;
            let results: Vec<Result<Vec<ChunkRecord>>> = pool.install(|| {
                files
                    .par_iter()
                    .map(|path| segment_file(&segmenter, path))
                    .collect()
            });
            for (path, records) in files.iter().zip(results) {
                write_records(formatter.as_mut(), &records?)?;
                progress.file_completed(&path.display().to_string());
            }
        } else {
            for path in &files {
                let records = segment_file(&segmenter, path)?;
                write_records(formatter.as_mut(), &records)?;
                progress.file_completed(&path.display().to_string());
            }
        }

        formatter.finish()?;
        progress.finish();
        Ok(())
    }

    /// Apply command-line overrides on top of the config file
    fn build_segmenter(&self, config: &CliConfig) -> Result<Segmenter> {
        let mut segmentation = config.segmentation.clone();
        if let Some(max_len) = self.max_len {
            segmentation.max_len = max_len;
        }
        if self.no_force {
            segmentation.force = false;
        }
        Ok(Segmenter::with_config(segmentation).map_err(CliError::from)?)
    }

    fn worker_threads(&self, config: &CliConfig) -> usize {
        match self.threads {
            Some(n) if n > 0 => n,
            _ if config.performance.worker_threads > 0 => config.performance.worker_threads,
            _ => num_cpus::get(),
        }
    }

    fn create_formatter(&self, format: OutputFormat, pretty: bool) -> Result<Box<dyn OutputFormatter>> {
        match &self.output {
            Some(path) => {
                let file = File::create(path)
                    .with_context(|| format!("Failed to create output file: {}", path.display()))?;
                Ok(make_formatter(format, BufWriter::new(file), pretty))
            }
            None => Ok(make_formatter(format, io::stdout(), pretty)),
        }
    }
}

/// Load the config file, or defaults when none is given
pub fn load_config(path: Option<&Path>) -> Result<CliConfig> {
    match path {
        Some(path) => {
            log::debug!("Loading configuration from {}", path.display());
            Ok(CliConfig::load(path)?)
        }
        None => Ok(CliConfig::default()),
    }
}

fn make_formatter<W: Write + Send + Sync + 'static>(
    format: OutputFormat,
    writer: W,
    pretty: bool,
) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TextFormatter::new(writer)),
        OutputFormat::Json => Box::new(JsonFormatter::new(writer, pretty)),
        OutputFormat::Markdown => Box::new(MarkdownFormatter::new(writer)),
    }
}

fn write_records(formatter: &mut dyn OutputFormatter, records: &[ChunkRecord]) -> Result<()> {
    for record in records {
        formatter.format_chunk(record)?;
    }
    Ok(())
}

/// Segment a whole file line by line
pub fn segment_file(segmenter: &Segmenter, path: &Path) -> Result<Vec<ChunkRecord>> {
    log::debug!(
        "Processing {} ({} bytes)",
        path.display(),
        FileReader::file_size(path)?
    );
    let text = FileReader::read_text(path)?;
    let records = segment_text(segmenter, &text);
    log::debug!("{}: {} chunk(s)", path.display(), records.len());
    Ok(records)
}

/// Segment text line by line; offsets are relative to the start of `text`
///
/// `\n`, `\r\n` and a lone `\r` all end a line.
pub fn segment_text(segmenter: &Segmenter, text: &str) -> Vec<ChunkRecord> {
    let mut records = Vec::new();
    let mut line_offset = 0;
    for line in split_lines(text) {
        records.extend(
            segmenter
                .segment(line)
                .detailed()
                .filter_map(|chunk| ChunkRecord::from_chunk(&chunk, line_offset)),
        );
        line_offset += line.len();
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use sentseg_core::SegmenterConfig;

    fn args() -> ProcessArgs {
        ProcessArgs {
            input: vec!["test.txt".to_string()],
            output: None,
            format: None,
            max_len: None,
            no_force: false,
            config: None,
            parallel: false,
            threads: None,
        }
    }

    #[test]
    fn test_segment_text_per_line() {
        let segmenter = Segmenter::new();
        let records = segment_text(&segmenter, "第一行。\n\n第二行！\n");
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["第一行。", "第二行！"]);
        assert_eq!(records[1].offset, "第一行。\n\n".len());
    }

    #[test]
    fn test_segment_text_carriage_return_ends_line() {
        let segmenter = Segmenter::new();
        let records = segment_text(&segmenter, "一。\r二。\r\n三。");
        let texts: Vec<&str> = records.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["一。", "二。", "三。"]);
        let offsets: Vec<usize> = records.iter().map(|r| r.offset).collect();
        assert_eq!(offsets, vec![0, 7, 15]);
    }

    #[test]
    fn test_segment_text_respects_budget() {
        let config = SegmenterConfig::builder().max_len(4.0).build().unwrap();
        let segmenter = Segmenter::with_config(config).unwrap();
        let records = segment_text(&segmenter, "一二三。四五六。");
        assert_eq!(records.len(), 2);
        assert!(records.iter().all(|r| r.weight <= 4.0));
    }

    #[test]
    fn test_overrides_apply() {
        let mut process = args();
        process.max_len = Some(7.0);
        process.no_force = true;
        let segmenter = process.build_segmenter(&CliConfig::default()).unwrap();
        assert_eq!(segmenter.config().max_len, 7.0);
        assert!(!segmenter.config().force);
    }

    #[test]
    fn test_invalid_budget_override() {
        let mut process = args();
        process.max_len = Some(0.0);
        let err = process.build_segmenter(&CliConfig::default()).unwrap_err();
        assert!(err.to_string().contains("invalid budget"));
    }

    #[test]
    fn test_format_names() {
        assert_eq!(OutputFormat::from_name("json").unwrap(), OutputFormat::Json);
        assert_eq!(OutputFormat::from_name("Markdown").unwrap(), OutputFormat::Markdown);
        assert!(OutputFormat::from_name("yaml").is_err());
    }

    #[test]
    fn test_worker_threads_precedence() {
        let mut config = CliConfig::default();
        config.performance.worker_threads = 3;

        let mut process = args();
        assert_eq!(process.worker_threads(&config), 3);
        process.threads = Some(5);
        assert_eq!(process.worker_threads(&config), 5);
    }
}
