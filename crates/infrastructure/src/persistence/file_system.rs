//! Real file system implementation.

use std::io::ErrorKind;
use std::path::Path;

use querybind_application::ports::{FileSystem, FileSystemError};
use tokio::fs;

/// Real file system implementation using `tokio::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioFileSystem;

impl TokioFileSystem {
    /// Creates a new `TokioFileSystem`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl FileSystem for TokioFileSystem {
    async fn read_file(&self, path: &Path) -> Result<Vec<u8>, FileSystemError> {
        fs::read(path).await.map_err(|e| match e.kind() {
            ErrorKind::NotFound => FileSystemError::NotFound(path.to_path_buf()),
            ErrorKind::IsADirectory => FileSystemError::NotAFile(path.to_path_buf()),
            _ => FileSystemError::Io(e),
        })
    }

    async fn write_file(&self, path: &Path, contents: &[u8]) -> Result<(), FileSystemError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::write(path, contents).await.map_err(FileSystemError::Io)
    }
}
