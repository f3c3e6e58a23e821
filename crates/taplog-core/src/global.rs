//! Process-wide default logger
//!
//! Convenience for hosts that want one logger reachable from anywhere without
//! threading an instance through. The default logger is an ordinary
//! [`Logger`] installed once; its callback table is still per-instance.

use std::sync::OnceLock;

use crate::error::{LogError, LogResult};
use crate::logger::Logger;
use crate::options::LoggerOptions;
use crate::value::LogValue;

static DEFAULT: OnceLock<Logger> = OnceLock::new();

/// Install the process-wide default logger
///
/// Can only succeed once; a second call fails with
/// [`LogError::AlreadyInitialized`] and leaves the installed logger in place.
pub fn init(options: LoggerOptions) -> LogResult<()> {
    let logger = Logger::new(options)?;
    DEFAULT
        .set(logger)
        .map_err(|_| LogError::AlreadyInitialized)
}

/// The default logger, if one has been installed
pub fn get() -> Option<&'static Logger> {
    DEFAULT.get()
}

/// Log at `DEBUG` through the default logger; a no-op when none is installed
pub fn debug(args: &[LogValue]) -> LogResult<()> {
    match DEFAULT.get() {
        Some(logger) => logger.debug(args),
        None => Ok(()),
    }
}

/// Log at `INFO` through the default logger; a no-op when none is installed
pub fn info(args: &[LogValue]) -> LogResult<()> {
    match DEFAULT.get() {
        Some(logger) => logger.info(args),
        None => Ok(()),
    }
}

/// Log at `WARN` through the default logger; a no-op when none is installed
pub fn warn(args: &[LogValue]) -> LogResult<()> {
    match DEFAULT.get() {
        Some(logger) => logger.warn(args),
        None => Ok(()),
    }
}

/// Log at `ERROR` through the default logger; a no-op when none is installed
pub fn error(args: &[LogValue]) -> LogResult<()> {
    match DEFAULT.get() {
        Some(logger) => logger.error(args),
        None => Ok(()),
    }
}
