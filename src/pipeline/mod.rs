//! The per-file redaction pipeline.
//!
//! One [`RedactionPipeline::process`] call takes a compressed log file
//! through the full sequence: derive working paths, decompress, redact
//! lines, recompress, copy the original's metadata onto the artifact,
//! delete intermediates, append an audit record. Steps run strictly in that
//! order and any failure aborts the job.
//!
//! Failure leaves already-produced artifacts in place: there is no rollback.
//! In particular, a metadata failure leaves a complete compressed artifact
//! without corrected attributes, and an aborted job may leave `.tmp` or
//! `.redacted` scratch files behind. Losing the original is never possible;
//! it is only ever opened for reading.

pub mod audit;
pub mod codec;
pub mod metadata;

pub use audit::{AuditLogger, AuditRecord};
pub use codec::GzipCodec;

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::{Path, PathBuf};

use tracing::warn;

use crate::domain::{JobPaths, LineRedactor, RedactionCounts};
use crate::error::{RedactorError, RedactorResult};

/// Result of one successful pipeline run.
#[derive(Debug, Clone)]
pub struct JobOutcome {
    /// The compressed, redacted artifact.
    pub output_path: PathBuf,

    /// Line counters, as written to the audit record.
    pub counts: RedactionCounts,
}

/// Sequences the pipeline steps for one file at a time.
pub struct RedactionPipeline {
    codec: GzipCodec,
    redactor: LineRedactor,
    audit: AuditLogger,
}

impl RedactionPipeline {
    /// Creates a pipeline whose audit records go to `logs_dir`.
    pub fn new(logs_dir: &Path) -> Self {
        Self {
            codec: GzipCodec::new(),
            redactor: LineRedactor::new(),
            audit: AuditLogger::new(logs_dir),
        }
    }

    /// The audit logger this pipeline appends to.
    pub fn audit(&self) -> &AuditLogger {
        &self.audit
    }

    /// Runs the full pipeline for `original`.
    ///
    /// On success the scratch files are gone, the artifact sits next to the
    /// original as `<stem>.redacted.gz` with the original's metadata, and
    /// one record has been appended to the audit log.
    pub fn process(&self, original: &Path) -> RedactorResult<JobOutcome> {
        let paths = JobPaths::derive(original)?;

        self.codec
            .decompress(&paths.original, &paths.temp_decompressed)?;

        let lines = read_lines(&paths.temp_decompressed)?;
        let (redacted, counts) = self.redactor.redact_lines(lines);
        write_lines(&paths.redacted_text, &redacted)?;

        self.codec
            .compress(&paths.redacted_text, &paths.output_compressed)?;

        metadata::preserve(&paths.original, &paths.output_compressed)?;

        // Best effort: the artifact is already complete, so a stuck scratch
        // file is not worth failing the job over.
        remove_scratch(&paths.temp_decompressed);
        remove_scratch(&paths.redacted_text);

        self.audit
            .append(&AuditRecord::now(&paths.original, counts))?;

        Ok(JobOutcome {
            output_path: paths.output_compressed,
            counts,
        })
    }
}

/// Reads `path` as UTF-8 text, one entry per line, terminators stripped.
fn read_lines(path: &Path) -> RedactorResult<Vec<String>> {
    let file = File::open(path).map_err(|e| RedactorError::read(path, e))?;
    BufReader::new(file)
        .lines()
        .map(|line| line.map_err(|e| RedactorError::read(path, e)))
        .collect()
}

/// Writes every line followed by a newline. An empty slice produces an
/// empty file.
fn write_lines(path: &Path, lines: &[String]) -> RedactorResult<()> {
    let file = File::create(path).map_err(|e| RedactorError::write(path, e))?;
    let mut writer = BufWriter::new(file);
    for line in lines {
        writeln!(writer, "{line}").map_err(|e| RedactorError::write(path, e))?;
    }
    writer.flush().map_err(|e| RedactorError::write(path, e))
}

fn remove_scratch(path: &Path) {
    if let Err(e) = fs::remove_file(path) {
        warn!(path = %path.display(), error = %e, "failed to remove scratch file");
    }
}
