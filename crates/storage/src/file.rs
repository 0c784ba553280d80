//! Snapshot file I/O
//!
//! Reads distinguish the bootstrap states (no file yet, empty file) from a
//! file that exists but cannot be used. Writes go to a temporary sibling
//! and are renamed into place, so a concurrent reader sees either the old
//! snapshot or the new one.

use crate::config::SnapshotFormat;
use crate::durability::DurabilityMode;
use horizon_core::{Error, Result, Snapshot};
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// Result of reading the snapshot file
#[derive(Debug)]
pub(crate) enum ReadOutcome {
    /// No file at the path: first run
    Missing,
    /// File exists but holds only whitespace
    Empty,
    /// File parsed as a snapshot
    Loaded(Snapshot),
}

impl ReadOutcome {
    /// Missing or empty file: the valid initial state
    pub(crate) fn is_bootstrap(&self) -> bool {
        matches!(self, ReadOutcome::Missing | ReadOutcome::Empty)
    }

    pub(crate) fn into_snapshot(self) -> Snapshot {
        match self {
            ReadOutcome::Missing | ReadOutcome::Empty => Snapshot::new(),
            ReadOutcome::Loaded(snapshot) => snapshot,
        }
    }
}

/// Read and decode the snapshot at `path`
///
/// # Errors
///
/// - [`Error::Io`] if the file exists but cannot be read
/// - [`Error::Corruption`] if the content is not a JSON array of objects
pub(crate) async fn read_snapshot(path: &Path) -> Result<ReadOutcome> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(ReadOutcome::Missing),
        Err(e) => return Err(Error::Io(e)),
    };

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(ReadOutcome::Empty);
    }

    Snapshot::parse(&bytes)
        .map(ReadOutcome::Loaded)
        .map_err(|e| Error::Corruption {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Replace the snapshot at `path` with `snapshot`
///
/// `tag` must be unique among concurrent writers to the same path; the
/// store passes the identity of the record being appended.
///
/// # Errors
///
/// Returns [`Error::Persistence`] if any step fails. The previous snapshot
/// is left in place in that case.
pub(crate) async fn write_snapshot(
    path: &Path,
    snapshot: &Snapshot,
    format: SnapshotFormat,
    durability: DurabilityMode,
    tag: &str,
) -> Result<()> {
    let bytes = match format {
        SnapshotFormat::Pretty => snapshot.to_json_pretty()?,
        SnapshotFormat::Compact => snapshot.to_json_compact()?,
    };
    let tmp = temp_path(path, tag);

    let result = write_and_rename(&tmp, path, &bytes, durability).await;
    if result.is_err() {
        // Best effort; the temp file may not exist
        let _ = tokio::fs::remove_file(&tmp).await;
    }
    result.map_err(|source| Error::Persistence {
        path: path.to_path_buf(),
        source,
    })
}

async fn write_and_rename(
    tmp: &Path,
    path: &Path,
    bytes: &[u8],
    durability: DurabilityMode,
) -> std::io::Result<()> {
    let mut file = tokio::fs::File::create(tmp).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    if durability.requires_fsync() {
        file.sync_all().await?;
    }
    drop(file);

    tokio::fs::rename(tmp, path).await?;
    debug!(path = %path.display(), bytes = bytes.len(), "snapshot written");

    if durability.requires_fsync() {
        sync_parent_dir(path).await?;
    }
    Ok(())
}

#[cfg(unix)]
async fn sync_parent_dir(path: &Path) -> std::io::Result<()> {
    match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => tokio::fs::File::open(dir).await?.sync_all().await,
        _ => Ok(()),
    }
}

#[cfg(not(unix))]
async fn sync_parent_dir(_path: &Path) -> std::io::Result<()> {
    Ok(())
}

/// Hidden sibling of `path`: `dir/.data.json.<tag>.tmp`
pub(crate) fn temp_path(path: &Path, tag: &str) -> PathBuf {
    let mut name = OsString::from(".");
    name.push(path.file_name().unwrap_or_default());
    name.push(format!(".{}.tmp", tag));
    path.with_file_name(name)
}
