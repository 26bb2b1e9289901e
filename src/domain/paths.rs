//! Working-filename derivation for one redaction job.
//!
//! All intermediate and output files live next to the original, sharing its
//! stem. Consumers that need to locate a run's output must use the same
//! derivation, so it is centralized here as a pure function over the path.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use crate::error::{RedactorError, RedactorResult};

/// Extension the input files must carry.
pub const COMPRESSED_EXTENSION: &str = "gz";

/// Marker that appears in every produced artifact's name. Files whose name
/// already contains it are skipped by the directory walk.
pub const REDACTED_MARKER: &str = "redacted";

/// The set of working paths for a single file's pipeline run.
///
/// For an original `app.log.gz` the derived names are `app.log.tmp`
/// (decompressed scratch), `app.log.redacted` (redacted plain text) and
/// `app.log.redacted.gz` (the final artifact). The two scratch files are
/// deleted at the end of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JobPaths {
    /// The source compressed file.
    pub original: PathBuf,

    /// Scratch file holding the decompressed text.
    pub temp_decompressed: PathBuf,

    /// Scratch file holding the redacted text before recompression.
    pub redacted_text: PathBuf,

    /// The final compressed, redacted artifact.
    pub output_compressed: PathBuf,
}

impl JobPaths {
    /// Derives the working paths for `original`.
    ///
    /// Fails with [`RedactorError::UnsupportedExtension`] unless the path
    /// ends in `.gz`; deriving names by blindly stripping a suffix from an
    /// arbitrary path would silently corrupt filenames.
    pub fn derive(original: &Path) -> RedactorResult<Self> {
        if original.extension().and_then(|e| e.to_str()) != Some(COMPRESSED_EXTENSION) {
            return Err(RedactorError::UnsupportedExtension {
                path: original.to_path_buf(),
            });
        }

        // Drops the validated ".gz", keeping any inner extension intact
        // (app.log.gz -> app.log).
        let stem = original.with_extension("");

        Ok(Self {
            original: original.to_path_buf(),
            temp_decompressed: append_suffix(&stem, ".tmp"),
            redacted_text: append_suffix(&stem, ".redacted"),
            output_compressed: append_suffix(&stem, ".redacted.gz"),
        })
    }
}

fn append_suffix(stem: &Path, suffix: &str) -> PathBuf {
    let mut name = OsString::from(stem.as_os_str());
    name.push(suffix);
    PathBuf::from(name)
}

/// Returns true if `path` should be processed: it carries the compressed
/// extension and its name does not already mark it as redacted output.
pub fn is_candidate(path: &Path) -> bool {
    let has_extension = path.extension().and_then(|e| e.to_str()) == Some(COMPRESSED_EXTENSION);
    let already_redacted = path
        .file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|n| n.contains(REDACTED_MARKER));
    has_extension && !already_redacted
}
