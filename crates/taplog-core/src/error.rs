//! Logger error types

use thiserror::Error;

/// Errors from logger construction, configuration loading, and the write path
///
/// The logger performs no local recovery: every write-path failure surfaces
/// to the caller of the log method, with no retry and no fallback sink.
#[derive(Debug, Error)]
pub enum LogError {
    /// File sink enabled without a configured path
    ///
    /// Checked at write time, not construction time, so the misconfiguration
    /// surfaces on the first call that actually reaches the file sink.
    #[error("file logging is enabled but no log file path is configured")]
    MissingFilePath,

    /// The process-wide default logger was initialized twice
    #[error("default logger is already initialized")]
    AlreadyInitialized,

    /// Failure deleting, creating, or appending to the log file, or writing
    /// to the console stream
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Options file could not be parsed
    #[error("config parse error: {0}")]
    Config(#[from] serde_yaml::Error),
}

pub type LogResult<T> = Result<T, LogError>;
