//! The persisted dictionary file.
//!
//! Writes go to a sibling temp file which is synced and then renamed over the
//! target, so a reader (or a restart) sees either the previous snapshot or the
//! new one, never a partial write. The directory is synced after the rename.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use lexicon_core::{LexiconError, Result, TermTable};
use tracing::{debug, warn};

use crate::codec;

/// Handle to the on-disk snapshot of a term table.
#[derive(Debug, Clone)]
pub struct SnapshotFile {
    path: PathBuf,
}

impl SnapshotFile {
    /// Create a handle for `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the snapshot.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and decode the snapshot.
    ///
    /// Returns `Ok(None)` if the file does not exist; any other read failure
    /// is `Io`, and undecodable content is `Decode`.
    pub fn read(&self) -> Result<Option<TermTable>> {
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(LexiconError::io(&self.path, e)),
        };
        let table = codec::decode(&bytes)?;
        debug!(path = ?self.path, entries = table.len(), "Read dictionary snapshot");
        Ok(Some(table))
    }

    /// Encode `table` and atomically replace the snapshot with it.
    ///
    /// The parent directory is created if missing.
    pub fn write(&self, table: &TermTable) -> Result<()> {
        let bytes = codec::encode(table).map_err(|e| LexiconError::io(&self.path, e))?;

        let dir = self.parent_dir();
        fs::create_dir_all(dir).map_err(|e| LexiconError::io(dir, e))?;

        let tmp_path = self.tmp_path();
        if let Err(e) = write_synced(&tmp_path, &bytes) {
            let _ = fs::remove_file(&tmp_path);
            return Err(LexiconError::io(&tmp_path, e));
        }
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(LexiconError::io(&self.path, e));
        }
        // The new snapshot is already in place; failing here would make the
        // caller revert a mutation that is visible on disk.
        if let Err(e) = sync_dir(dir) {
            warn!(dir = ?dir, error = %e, "Failed to sync dictionary directory");
        }

        debug!(path = ?self.path, entries = table.len(), bytes = bytes.len(), "Wrote dictionary snapshot");
        Ok(())
    }

    fn parent_dir(&self) -> &Path {
        match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        }
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(format!(".tmp.{}", std::process::id()));
        self.path.with_file_name(name)
    }
}

fn write_synced(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Persist a rename by syncing the directory entry.
#[cfg(unix)]
fn sync_dir(dir: &Path) -> io::Result<()> {
    fs::File::open(dir)?.sync_all()
}

// Directories cannot be opened as files here; the rename is already durable.
#[cfg(not(unix))]
fn sync_dir(_dir: &Path) -> io::Result<()> {
    Ok(())
}
