//! Log redaction tool for gzip-compressed log files.
//!
//! This library takes compressed log files, removes tokens carrying Social
//! Security or credit card markers, and produces a recompressed replacement
//! artifact that keeps the original file's metadata. Every run is recorded
//! in an append-only audit trail.
//!
//! # Features
//!
//! - **Token Redaction**: Drops whitespace-delimited tokens containing the
//!   literal markers `SSN` or `CC`, keeping the rest of each line intact
//! - **Metadata Preservation**: The artifact carries the original's
//!   timestamps, permission bits, owner and group
//! - **Audit Trail**: One record per processed file in a shared
//!   `audit-log.txt`, created lazily and never truncated
//! - **Fail-Fast Pipeline**: Stream and attribute failures abort the job
//!   instead of silently producing an incomplete artifact
//!
//! # Architecture
//!
//! - [`domain`]: Path derivation and line classification/redaction
//! - [`pipeline`]: The per-file orchestrator plus its gzip codec, metadata
//!   and audit components
//! - [`error`]: Comprehensive error handling
//!
//! # Quick Start
//!
//! ```no_run
//! use logredact::RedactionPipeline;
//! use std::path::Path;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pipeline = RedactionPipeline::new(Path::new("/var/log/app"));
//! let outcome = pipeline.process(Path::new("/var/log/app/app.log.gz"))?;
//! println!(
//!     "{} lines redacted -> {}",
//!     outcome.counts.lines_redacted,
//!     outcome.output_path.display()
//! );
//! # Ok(())
//! # }
//! ```
//!
//! # Redaction semantics
//!
//! ```
//! use logredact::LineRedactor;
//!
//! let redactor = LineRedactor::new();
//! let (lines, counts) =
//!     redactor.redact_lines(["user=alice SSN=123-45-6789 action=login"]);
//! assert_eq!(lines[0], "user=alice action=login ");
//! assert_eq!(counts.lines_redacted, 1);
//! ```

// Public API
pub mod domain;
pub mod error;
pub mod pipeline;

// Re-exports for convenient access
pub use domain::{paths::is_candidate, JobPaths, LineRedactor, RedactionCounts};
pub use error::{RedactorError, RedactorResult};
pub use pipeline::{AuditLogger, AuditRecord, GzipCodec, JobOutcome, RedactionPipeline};

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_pipeline_creation() {
        let _pipeline = RedactionPipeline::new(Path::new("/tmp"));
    }

    #[test]
    fn test_public_surface() {
        assert!(is_candidate(Path::new("a.gz")));
        let paths = JobPaths::derive(Path::new("a.gz")).unwrap();
        assert_eq!(paths.output_compressed, Path::new("a.redacted.gz"));
    }
}
