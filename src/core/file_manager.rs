use crate::utils::error::Result;
use std::fs::File;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Opens files for writing and hands them out as [`FileGuard`]s.
#[derive(Debug, Clone)]
pub struct FileManager {
    path: PathBuf,
}

impl FileManager {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates or truncates the file.
    pub fn open(&self) -> Result<FileGuard> {
        let file = File::create(&self.path)?;
        tracing::debug!("Opened {} for writing", self.path.display());
        Ok(FileGuard {
            file,
            path: self.path.clone(),
        })
    }

    /// Runs `body` with the open file. The handle is released before this
    /// returns, whether `body` succeeded or not; errors from `body` are
    /// passed through as-is.
    pub fn with_file<T, F>(&self, body: F) -> Result<T>
    where
        F: FnOnce(&mut FileGuard) -> Result<T>,
    {
        let mut guard = self.open()?;
        match body(&mut guard) {
            Ok(value) => {
                guard.close()?;
                Ok(value)
            }
            // guard dropped here, which closes the handle
            Err(e) => Err(e),
        }
    }
}

/// A writable file that is closed when the guard goes out of scope.
#[derive(Debug)]
pub struct FileGuard {
    file: File,
    path: PathBuf,
}

impl FileGuard {
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Flushes and closes, surfacing errors that `Drop` would swallow.
    /// Works on anything writable, including `/dev/null` and FIFOs.
    pub fn close(mut self) -> Result<()> {
        self.file.flush()?;
        Ok(())
    }
}

impl Write for FileGuard {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.file.flush()
    }
}

impl Drop for FileGuard {
    fn drop(&mut self) {
        tracing::debug!("Closed {}", self.path.display());
    }
}
