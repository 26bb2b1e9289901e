//! Domain models and business logic for log redaction.
//!
//! This module contains the core business rules for the tool: how working
//! filenames are derived from an input file, which files are candidates for
//! processing, and how individual log lines are classified and redacted.

pub mod paths;
pub mod scan;

pub use paths::JobPaths;
pub use scan::{LineRedactor, RedactionCounts};
