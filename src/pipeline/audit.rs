//! Append-only audit trail of redaction runs.
//!
//! One human-readable record per processed file, appended to a shared
//! `audit-log.txt`. The file is created lazily on first write and never
//! truncated. Each append opens and closes the file independently; with the
//! strictly sequential pipeline that is the only serialization needed. If
//! jobs ever run concurrently, appends must be funneled through a single
//! writer (or rely on O_APPEND atomicity) to keep records from interleaving.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Local};

use crate::domain::RedactionCounts;
use crate::error::{RedactorError, RedactorResult};

/// Name of the shared audit file inside the logs directory.
pub const AUDIT_FILE_NAME: &str = "audit-log.txt";

/// Timestamp layout, e.g. `Mon, 31 Aug 2026 14:02:07 +0000`.
const TIMESTAMP_FORMAT: &str = "%a, %-d %b %Y %H:%M:%S %z";

/// One immutable audit entry. Appended, never mutated or deleted.
#[derive(Debug, Clone)]
pub struct AuditRecord {
    pub timestamp: DateTime<Local>,
    pub filename: PathBuf,
    pub counts: RedactionCounts,
}

impl AuditRecord {
    /// Builds a record for `filename` stamped with the current local time.
    pub fn now(filename: &Path, counts: RedactionCounts) -> Self {
        Self {
            timestamp: Local::now(),
            filename: filename.to_path_buf(),
            counts,
        }
    }

    /// Renders the record as a single audit-log line (no terminator).
    fn render(&self) -> String {
        format!(
            "Timestamp: {}  |  Modified Filename: {}  |  Number of Lines Processed: {}  |  Number of Lines Redacted: {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.filename.display(),
            self.counts.lines_processed,
            self.counts.lines_redacted,
        )
    }
}

/// Writer for the shared audit log.
///
/// Holds only the log path, not an open handle, so tests can point it at a
/// temporary directory and nothing stays open between jobs.
#[derive(Debug, Clone)]
pub struct AuditLogger {
    log_path: PathBuf,
}

impl AuditLogger {
    /// Creates a logger writing to `audit-log.txt` inside `logs_dir`.
    pub fn new(logs_dir: &Path) -> Self {
        Self {
            log_path: logs_dir.join(AUDIT_FILE_NAME),
        }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.log_path
    }

    /// Appends one record, creating the file if it does not exist yet.
    pub fn append(&self, record: &AuditRecord) -> RedactorResult<()> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .map_err(|e| RedactorError::write(&self.log_path, e))?;

        writeln!(file, "{}", record.render())
            .map_err(|e| RedactorError::write(&self.log_path, e))?;
        file.flush()
            .map_err(|e| RedactorError::write(&self.log_path, e))
    }
}
