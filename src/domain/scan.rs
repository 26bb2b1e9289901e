//! Line classification and token-level redaction.
//!
//! Detection is deliberately literal: a line is sensitive if it contains
//! `"SSN"` or `"CC"` as a case-sensitive substring anywhere, with no word
//! boundary check (so `ACCOUNT` matches `CC`). This is not a PII classifier;
//! the sources feeding this tool tag sensitive fields with these markers.

/// Literal substrings that mark a line (and a token) as sensitive.
pub const SENSITIVE_TOKENS: [&str; 2] = ["SSN", "CC"];

/// Counters accumulated over one file's line sequence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedactionCounts {
    /// Total lines seen, sensitive or not.
    pub lines_processed: usize,

    /// Lines that contained at least one sensitive substring. Incremented
    /// once per line regardless of how many tokens were dropped.
    pub lines_redacted: usize,
}

/// Rewrites a sequence of log lines, dropping sensitive tokens.
///
/// Line order is stable and no line is ever dropped entirely, only its
/// sensitive tokens. Clean lines pass through byte-identical.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineRedactor;

impl LineRedactor {
    pub fn new() -> Self {
        Self
    }

    /// Returns true if `text` contains any sensitive substring.
    pub fn is_sensitive(&self, text: &str) -> bool {
        SENSITIVE_TOKENS.iter().any(|token| text.contains(token))
    }

    /// Redacts one sensitive line: splits on single spaces, drops every
    /// token containing a sensitive substring, and rejoins the survivors
    /// with one trailing space each.
    ///
    /// The trailing space per token means redacted lines end with one extra
    /// space before the line terminator. That artifact is part of the
    /// observable output format and is covered by tests.
    fn redact_line(&self, line: &str) -> String {
        let mut rebuilt = String::with_capacity(line.len());
        for token in line.split(' ') {
            if !self.is_sensitive(token) {
                rebuilt.push_str(token);
                rebuilt.push(' ');
            }
        }
        rebuilt
    }

    /// Processes every line, returning the rewritten sequence and counters.
    ///
    /// Running the output through a second pass produces zero additional
    /// redactions: survivors contain no sensitive substring by construction.
    pub fn redact_lines<I>(&self, lines: I) -> (Vec<String>, RedactionCounts)
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let mut counts = RedactionCounts::default();
        let mut output = Vec::new();

        for line in lines {
            let line = line.as_ref();
            counts.lines_processed += 1;

            if self.is_sensitive(line) {
                counts.lines_redacted += 1;
                output.push(self.redact_line(line));
            } else {
                output.push(line.to_string());
            }
        }

        (output, counts)
    }
}
