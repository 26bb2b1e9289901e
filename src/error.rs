//! Error types for the log redaction pipeline.
//!
//! This module provides a comprehensive error handling strategy with proper
//! error categorization and context preservation. Every filesystem failure
//! carries the path it occurred on so batch runs can report which file broke.

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type alias for redaction operations.
pub type RedactorResult<T> = Result<T, RedactorError>;

/// Direction of the file operation that failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IoAction {
    Read,
    Write,
}

impl fmt::Display for IoAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Read => write!(f, "reading"),
            Self::Write => write!(f, "writing"),
        }
    }
}

/// Comprehensive error type for all pipeline operations.
///
/// This enum categorizes errors by their source and provides rich context
/// for debugging. Stream errors abort a job before later steps run; the
/// orchestrator never proceeds on a swallowed failure.
#[derive(Debug)]
pub enum RedactorError {
    /// Error occurred while reading or writing a file, including a corrupt
    /// gzip stream on the read side
    Io {
        path: PathBuf,
        action: IoAction,
        source: io::Error,
    },

    /// Input file does not carry the expected compressed-format suffix, so
    /// working filenames cannot be derived from it
    UnsupportedExtension { path: PathBuf },

    /// Failed to query or apply a file attribute (timestamps, permission
    /// bits, owner or group)
    Metadata {
        path: PathBuf,
        attribute: &'static str,
        source: io::Error,
    },
}

impl fmt::Display for RedactorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io {
                path,
                action,
                source,
            } => {
                write!(f, "IO error {} '{}': {}", action, path.display(), source)
            }
            Self::UnsupportedExtension { path } => {
                write!(
                    f,
                    "'{}' does not end in the expected .gz suffix",
                    path.display()
                )
            }
            Self::Metadata {
                path,
                attribute,
                source,
            } => {
                write!(
                    f,
                    "Metadata error ({}) for '{}': {}",
                    attribute,
                    path.display(),
                    source
                )
            }
        }
    }
}

impl std::error::Error for RedactorError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } | Self::Metadata { source, .. } => Some(source),
            Self::UnsupportedExtension { .. } => None,
        }
    }
}

impl RedactorError {
    /// Builds an [`RedactorError::Io`] for a read failure on `path`.
    pub fn read(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            action: IoAction::Read,
            source,
        }
    }

    /// Builds an [`RedactorError::Io`] for a write failure on `path`.
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            action: IoAction::Write,
            source,
        }
    }
}
