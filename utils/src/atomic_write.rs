//! Atomic file write helpers.
//!
//! Writes go to a temp file in the destination directory which is then renamed
//! over the target, so readers see either the old or the new content. Where
//! rename-over-existing fails, the old file is moved to `.bak` first and
//! restored if the second rename also fails.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

/// Recover from an interrupted atomic write by restoring `path.bak`.
///
/// If `path` is missing but its backup exists, a crash happened between
/// moving the old file aside and renaming the new one into place.
pub fn recover_bak_file(path: &Path) {
    let backup = path.with_extension("bak");
    if path.exists() || !backup.exists() {
        return;
    }
    match fs::rename(&backup, path) {
        Ok(()) => {
            tracing::warn!(
                path = %path.display(),
                "Recovered .bak file from interrupted atomic write"
            );
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), "Failed to recover .bak file: {e}");
        }
    }
}

/// Replace `path` with `bytes`. The temp file is synced before the rename.
pub fn atomic_write(path: impl AsRef<Path>, bytes: &[u8]) -> io::Result<()> {
    let path = path.as_ref();
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(parent)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;

    let Err(err) = tmp.persist(path) else {
        tracing::debug!(path = %path.display(), bytes = bytes.len(), "Atomic write complete");
        return Ok(());
    };
    if !path.exists() {
        return Err(err.error);
    }

    // Rename over an existing file failed: move it aside and retry.
    let backup_path = path.with_extension("bak");
    let _ = fs::remove_file(&backup_path);
    fs::rename(path, &backup_path)?;

    if let Err(rename_err) = err.file.persist(path) {
        let _ = fs::rename(&backup_path, path);
        return Err(rename_err.error);
    }
    if let Err(e) = fs::remove_file(&backup_path) {
        tracing::warn!(
            path = %backup_path.display(),
            "Failed to remove .bak after atomic write: {e}"
        );
    }
    Ok(())
}
