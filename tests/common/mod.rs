//! Common test utilities and helpers.
//!
//! Provides gzip fixture builders and readers shared across the
//! integration suites.

#![allow(dead_code)]

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

/// Writes `text` gzip-compressed to `path`.
pub fn write_gzip_fixture(path: &Path, text: &str) {
    let file = File::create(path).expect("create fixture");
    let mut encoder = GzEncoder::new(file, Compression::default());
    encoder.write_all(text.as_bytes()).expect("write fixture");
    encoder.finish().expect("finish fixture");
}

/// Writes a gzip fixture whose content is `lines` joined with `\n` plus a
/// trailing newline.
pub fn write_gzip_lines(path: &Path, lines: &[&str]) {
    let mut text = lines.join("\n");
    if !lines.is_empty() {
        text.push('\n');
    }
    write_gzip_fixture(path, &text);
}

/// Decompresses the gzip file at `path` into a `String`.
pub fn read_gzip(path: &Path) -> String {
    let file = File::open(path).expect("open artifact");
    let mut text = String::new();
    GzDecoder::new(file)
        .read_to_string(&mut text)
        .expect("decompress artifact");
    text
}
