//! Streaming gzip decompression and compression.
//!
//! Both directions copy in fixed-size chunks so file size never dictates
//! memory use. Every failure is propagated to the caller with the failing
//! path and direction attached; later pipeline steps assume the destination
//! file exists and is complete, so a half-written stream must abort the job.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use flate2::Compression;

use crate::error::{RedactorError, RedactorResult};

/// Copy buffer size for both directions.
const CHUNK_SIZE: usize = 1024;

/// Gzip codec for the pipeline's decompress and recompress steps.
#[derive(Debug, Clone, Copy, Default)]
pub struct GzipCodec;

impl GzipCodec {
    pub fn new() -> Self {
        Self
    }

    /// Decompresses the gzip stream at `source` into a plain file at `dest`.
    ///
    /// Returns the number of decompressed bytes written. A corrupt or
    /// truncated gzip stream surfaces as a read error on `source`.
    pub fn decompress(&self, source: &Path, dest: &Path) -> RedactorResult<u64> {
        let input = File::open(source).map_err(|e| RedactorError::read(source, e))?;
        let mut decoder = GzDecoder::new(input);
        let mut output = File::create(dest).map_err(|e| RedactorError::write(dest, e))?;

        let total = copy_chunked(&mut decoder, &mut output, source, dest)?;
        output
            .flush()
            .map_err(|e| RedactorError::write(dest, e))?;
        Ok(total)
    }

    /// Compresses the plain file at `source` into a gzip stream at `dest`.
    ///
    /// Returns the number of uncompressed bytes consumed.
    pub fn compress(&self, source: &Path, dest: &Path) -> RedactorResult<u64> {
        let mut input = File::open(source).map_err(|e| RedactorError::read(source, e))?;
        let output = File::create(dest).map_err(|e| RedactorError::write(dest, e))?;
        let mut encoder = GzEncoder::new(output, Compression::default());

        let total = copy_chunked(&mut input, &mut encoder, source, dest)?;

        // finish() writes the gzip trailer; without it the artifact is
        // unreadable.
        let mut file = encoder
            .finish()
            .map_err(|e| RedactorError::write(dest, e))?;
        file.flush().map_err(|e| RedactorError::write(dest, e))?;
        Ok(total)
    }
}

/// Copies `reader` to `writer` in [`CHUNK_SIZE`] chunks until end of stream.
fn copy_chunked<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    read_path: &Path,
    write_path: &Path,
) -> RedactorResult<u64> {
    let mut buffer = [0u8; CHUNK_SIZE];
    let mut total = 0u64;

    loop {
        let len = reader
            .read(&mut buffer)
            .map_err(|e| RedactorError::read(read_path, e))?;
        if len == 0 {
            return Ok(total);
        }
        writer
            .write_all(&buffer[..len])
            .map_err(|e| RedactorError::write(write_path, e))?;
        total += len as u64;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{IoAction, RedactorError};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_round_trip() {
        let dir = TempDir::new().unwrap();
        let plain = dir.path().join("plain.txt");
        let packed = dir.path().join("packed.gz");
        let unpacked = dir.path().join("unpacked.txt");

        // Larger than one chunk so the copy loop iterates.
        let payload = "the quick brown fox\n".repeat(200);
        fs::write(&plain, &payload).unwrap();

        let codec = GzipCodec::new();
        let consumed = codec.compress(&plain, &packed).unwrap();
        assert_eq!(consumed, payload.len() as u64);

        let produced = codec.decompress(&packed, &unpacked).unwrap();
        assert_eq!(produced, payload.len() as u64);
        assert_eq!(fs::read_to_string(&unpacked).unwrap(), payload);
    }

    #[test]
    fn test_missing_source_is_a_read_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("absent.gz");
        let dest = dir.path().join("out.txt");

        let err = GzipCodec::new().decompress(&missing, &dest).unwrap_err();
        match err {
            RedactorError::Io { path, action, .. } => {
                assert_eq!(path, missing);
                assert_eq!(action, IoAction::Read);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_corrupt_stream_is_propagated() {
        let dir = TempDir::new().unwrap();
        let bogus = dir.path().join("bogus.gz");
        let dest = dir.path().join("out.txt");
        fs::write(&bogus, b"this is not a gzip stream").unwrap();

        let err = GzipCodec::new().decompress(&bogus, &dest).unwrap_err();
        assert!(matches!(
            err,
            RedactorError::Io {
                action: IoAction::Read,
                ..
            }
        ));
    }
}
