//! File storage boundary for client photos.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FileStoreError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type FileStoreResult<T> = Result<T, FileStoreError>;

/// Persists raw bytes at a computed path.
pub trait FileStore {
    fn write(&self, path: &Path, bytes: &[u8]) -> FileStoreResult<()>;
}

/// Writes files to the local disk, creating parent directories as needed.
///
/// The bytes land in a temporary file next to the target first and are then
/// renamed into place, so a reader never sees a half-written photo.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalFileStore;

impl LocalFileStore {
    pub fn new() -> Self {
        Self
    }
}

impl FileStore for LocalFileStore {
    fn write(&self, path: &Path, bytes: &[u8]) -> FileStoreResult<()> {
        let io_err = |source: std::io::Error| FileStoreError::Io {
            path: path.to_path_buf(),
            source,
        };

        let parent = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        std::fs::create_dir_all(parent).map_err(io_err)?;

        let mut tmp = NamedTempFile::new_in(parent).map_err(io_err)?;
        tmp.write_all(bytes).map_err(io_err)?;
        tmp.persist(path).map_err(|e| io_err(e.error))?;

        Ok(())
    }
}
