//! Copies file metadata from the original onto the redacted artifact.
//!
//! The artifact should be indistinguishable from the original in everything
//! but content: last-access and last-modified times, permission bits, owner
//! and group. Creation time cannot be set through any Linux syscall, so it
//! is the one attribute that stays the artifact's own.
//!
//! Order of operations is timestamps, then permission bits, then owner and
//! group. A failure at any step surfaces immediately; there is no rollback
//! of attributes already applied.

use std::fs;
use std::os::unix::fs::MetadataExt;
use std::path::Path;

use filetime::FileTime;

use crate::error::{RedactorError, RedactorResult};

/// Applies `original`'s timestamps, permissions, owner and group to
/// `output`. Both files must exist.
///
/// Changing ownership typically requires the caller to own the file or hold
/// CAP_CHOWN; under an unprivileged test run the original and the artifact
/// already share an owner, so the chown is a no-op that still exercises the
/// code path.
pub fn preserve(original: &Path, output: &Path) -> RedactorResult<()> {
    let source_meta = fs::metadata(original).map_err(|e| RedactorError::Metadata {
        path: original.to_path_buf(),
        attribute: "stat",
        source: e,
    })?;

    let atime = FileTime::from_last_access_time(&source_meta);
    let mtime = FileTime::from_last_modification_time(&source_meta);
    filetime::set_file_times(output, atime, mtime).map_err(|e| RedactorError::Metadata {
        path: output.to_path_buf(),
        attribute: "timestamps",
        source: e,
    })?;

    fs::set_permissions(output, source_meta.permissions()).map_err(|e| {
        RedactorError::Metadata {
            path: output.to_path_buf(),
            attribute: "permissions",
            source: e,
        }
    })?;

    std::os::unix::fs::chown(output, Some(source_meta.uid()), Some(source_meta.gid())).map_err(
        |e| RedactorError::Metadata {
            path: output.to_path_buf(),
            attribute: "owner/group",
            source: e,
        },
    )?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use std::os::unix::fs::PermissionsExt;
    use tempfile::TempDir;

    #[test]
    fn test_preserve_copies_mode_owner_and_times() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("app.log.gz");
        let output = dir.path().join("app.log.redacted.gz");
        File::create(&original).unwrap();
        File::create(&output).unwrap();

        let mut perms = fs::metadata(&original).unwrap().permissions();
        perms.set_mode(0o640);
        fs::set_permissions(&original, perms).unwrap();

        // Backdate the original so the copied mtime is distinguishable from
        // the artifact's own creation instant.
        let stamp = FileTime::from_unix_time(1_600_000_000, 0);
        filetime::set_file_times(&original, stamp, stamp).unwrap();

        preserve(&original, &output).unwrap();

        let source_meta = fs::metadata(&original).unwrap();
        let copied_meta = fs::metadata(&output).unwrap();
        assert_eq!(copied_meta.permissions().mode() & 0o777, 0o640);
        assert_eq!(copied_meta.uid(), source_meta.uid());
        assert_eq!(copied_meta.gid(), source_meta.gid());
        assert_eq!(
            FileTime::from_last_modification_time(&copied_meta),
            stamp
        );
    }

    #[test]
    fn test_missing_original_fails_with_metadata_error() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join("out.gz");
        File::create(&output).unwrap();

        let err = preserve(&dir.path().join("absent.gz"), &output).unwrap_err();
        assert!(matches!(err, RedactorError::Metadata { .. }));
    }

    #[test]
    fn test_missing_output_fails_with_metadata_error() {
        let dir = TempDir::new().unwrap();
        let original = dir.path().join("in.gz");
        File::create(&original).unwrap();

        let err = preserve(&original, &dir.path().join("absent.gz")).unwrap_err();
        assert!(matches!(err, RedactorError::Metadata { .. }));
    }
}
