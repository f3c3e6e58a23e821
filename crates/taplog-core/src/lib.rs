//! Taplog Core
//!
//! Minimal leveled logging: timestamped, severity-tagged lines written to an
//! optional console sink and/or an optional append-only file sink, with one
//! pre-filter callback slot per severity. Everything is synchronous; the file
//! is opened and closed per write and errors surface directly to the caller.
//!
//! ```rust,ignore
//! use taplog_core::{log_args, Logger, LoggerOptions, Severity};
//!
//! let logger = Logger::new(
//!     LoggerOptions::new()
//!         .with_console()
//!         .with_file("app.log")
//!         .with_level(Severity::Debug),
//! )?;
//!
//! // Fires on every error() call, before the severity filter
//! logger.on("ERROR", |args| {
//!     eprintln!("alert hook saw {} argument(s)", args.len());
//! });
//!
//! logger.info(&log_args!["listening on", 8080])?;
//! ```

pub mod error;
pub mod global;
pub mod level;
pub mod logger;
pub mod options;
pub mod sink;
pub mod value;

// Re-export commonly used types
pub use error::{LogError, LogResult};
pub use level::Severity;
pub use logger::{LogCallback, Logger};
pub use options::LoggerOptions;
pub use sink::{ConsoleSink, FileSink};
pub use value::LogValue;
