//! Append-only file sink

use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::error::{LogError, LogResult};

/// Appends formatted lines to a file, opening and closing per call
///
/// No handle is held between calls and nothing is buffered across them; each
/// append is a discrete open-write-close. The path stays optional here so the
/// missing-path misconfiguration surfaces at write time, not construction.
#[derive(Debug, Clone, Default)]
pub struct FileSink {
    path: Option<PathBuf>,
}

impl FileSink {
    /// Create a file sink for an optional path
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    /// The configured file path, if any
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Construction-time file policy
    ///
    /// Removes any stale file at the path, then recreates it empty when
    /// `clear_on_init` is set. End state: file absent, or present with zero
    /// bytes. Does nothing when no path is configured.
    pub fn prepare(&self, clear_on_init: bool) -> LogResult<()> {
        let Some(path) = self.path.as_ref() else {
            return Ok(());
        };
        if path.exists() {
            fs::remove_file(path)?;
        }
        if clear_on_init {
            File::create(path)?;
        }
        Ok(())
    }

    /// Append one formatted line, creating the file if needed
    pub fn append(&self, line: &str) -> LogResult<()> {
        let path = self.path.as_ref().ok_or(LogError::MissingFilePath)?;
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_append_creates_and_appends() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.log");
        let sink = FileSink::new(Some(path.clone()));

        sink.append("first\n").unwrap();
        sink.append("second\n").unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert_eq!(content, "first\nsecond\n");
    }

    #[test]
    fn test_append_without_path_errors() {
        let sink = FileSink::new(None);
        let err = sink.append("line\n").unwrap_err();
        assert!(matches!(err, LogError::MissingFilePath));
    }

    #[test]
    fn test_prepare_removes_stale_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.log");
        fs::write(&path, "stale contents\n").unwrap();

        let sink = FileSink::new(Some(path.clone()));
        sink.prepare(false).unwrap();
        assert!(!path.exists());
    }

    #[test]
    fn test_prepare_with_clear_leaves_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.log");
        fs::write(&path, "stale contents\n").unwrap();

        let sink = FileSink::new(Some(path.clone()));
        sink.prepare(true).unwrap();
        assert!(path.exists());
        assert_eq!(fs::metadata(&path).unwrap().len(), 0);
    }

    #[test]
    fn test_prepare_without_path_is_noop() {
        let sink = FileSink::new(None);
        sink.prepare(true).unwrap();
    }
}
