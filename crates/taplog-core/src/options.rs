//! Logger configuration options

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::LogResult;
use crate::level::Severity;

/// Construction options for [`Logger`](crate::Logger)
///
/// Everything defaults to off: no sinks enabled, no file path, minimum level
/// `Info`. Options are fixed once the logger is constructed; only callback
/// registrations mutate a logger afterwards.
///
/// # Example
///
/// ```rust,ignore
/// use taplog_core::{LoggerOptions, Severity};
///
/// let options = LoggerOptions::new()
///     .with_console()
///     .with_file("app.log")
///     .with_level(Severity::Debug);
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerOptions {
    /// Enable the append-only file sink
    #[serde(default)]
    pub log_to_file: bool,

    /// Enable the console (stdout) sink
    #[serde(default)]
    pub log_to_console: bool,

    /// Path of the log file; required for the file sink to actually write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<PathBuf>,

    /// Minimum severity emitted to sinks
    #[serde(default)]
    pub level: Severity,

    /// Start from an existing empty file at construction instead of starting
    /// with the file absent
    #[serde(default)]
    pub clear_file_on_init: bool,
}

impl LoggerOptions {
    /// Create options with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the console sink
    pub fn with_console(mut self) -> Self {
        self.log_to_console = true;
        self
    }

    /// Enable the file sink and set its path
    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.log_to_file = true;
        self.log_file_path = Some(path.into());
        self
    }

    /// Set the minimum emitted severity
    pub fn with_level(mut self, level: Severity) -> Self {
        self.level = level;
        self
    }

    /// Set the construction-time file-clear policy
    pub fn with_clear_file_on_init(mut self, clear: bool) -> Self {
        self.clear_file_on_init = clear;
        self
    }

    /// Load options from a YAML file
    ///
    /// Missing keys fall back to the field defaults; `level` is the uppercase
    /// tag (`DEBUG`/`INFO`/`WARN`/`ERROR`).
    pub fn from_yaml_file(path: impl AsRef<Path>) -> LogResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Ok(serde_yaml::from_str(&content)?)
    }
}
