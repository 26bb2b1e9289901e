//! Log Redaction CLI Application.
//!
//! This binary walks a directory of gzipped log files, runs the redaction
//! pipeline on each candidate, and reports a batch summary. One file's
//! failure never stops the batch.

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};

use logredact::{is_candidate, RedactionPipeline};

/// Log Redaction Tool
///
/// Redacts SSN/CC tokens from every .gz log file in a directory, producing
/// `<name>.redacted.gz` replacements that keep the original metadata, and
/// appends one record per file to `audit-log.txt`.
#[derive(Parser)]
#[command(name = "logredact")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory containing the .gz log files to redact
    #[arg(value_name = "DIRECTORY")]
    directory: PathBuf,

    /// Directory for audit-log.txt (defaults to DIRECTORY)
    #[arg(long, value_name = "DIR")]
    logs_dir: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Batch runner with per-file failure isolation.
struct BatchHandler {
    pipeline: RedactionPipeline,
    verbose: bool,
}

impl BatchHandler {
    fn new(logs_dir: &Path, verbose: bool) -> Self {
        Self {
            pipeline: RedactionPipeline::new(logs_dir),
            verbose,
        }
    }

    /// Enumerates candidate files in `directory`, non-recursively.
    ///
    /// Sorted by name so repeated runs process (and audit) files in a
    /// stable order.
    fn candidates(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let entries = fs::read_dir(directory)
            .with_context(|| format!("Failed to read directory {}", directory.display()))?;

        let mut files = Vec::new();
        for entry in entries {
            let entry = entry
                .with_context(|| format!("Failed to read directory {}", directory.display()))?;
            let path = entry.path();
            if path.is_file() && is_candidate(&path) {
                files.push(path);
            }
        }
        files.sort();
        Ok(files)
    }

    /// Processes every candidate, returning the paths that failed.
    fn run(&self, directory: &Path) -> Result<Vec<PathBuf>> {
        let candidates = self.candidates(directory)?;
        if candidates.is_empty() {
            println!("No unredacted .gz files found in {}", directory.display());
            return Ok(Vec::new());
        }

        let mut failed = Vec::new();
        for path in candidates {
            if self.verbose {
                println!("Processing {}", path.display());
            }
            match self.pipeline.process(&path) {
                Ok(outcome) => {
                    println!(
                        "✓ {} → {} ({} of {} lines redacted)",
                        path.display(),
                        outcome.output_path.display(),
                        outcome.counts.lines_redacted,
                        outcome.counts.lines_processed
                    );
                }
                Err(e) => {
                    eprintln!("✗ {}: {}", path.display(), e);
                    failed.push(path);
                }
            }
        }
        Ok(failed)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    if !cli.directory.is_dir() {
        anyhow::bail!("Not a directory: {}", cli.directory.display());
    }

    let logs_dir = cli.logs_dir.clone().unwrap_or_else(|| cli.directory.clone());
    let handler = BatchHandler::new(&logs_dir, cli.verbose);

    let failed = handler.run(&cli.directory)?;

    if failed.is_empty() {
        println!("\nLog Redaction Complete\n");
        Ok(())
    } else {
        println!("\nLog Redaction finished with {} failure(s):", failed.len());
        for path in &failed {
            println!("  {}", path.display());
        }
        std::process::exit(1);
    }
}
