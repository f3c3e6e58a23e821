//! The logger component

use std::sync::{Arc, RwLock};

use chrono::{SecondsFormat, Utc};

use crate::error::LogResult;
use crate::level::Severity;
use crate::options::LoggerOptions;
use crate::sink::{ConsoleSink, FileSink};
use crate::value::{join_values, LogValue};

/// Callback invoked with the call's arguments whenever its severity's method
/// runs, before the minimum-level filter is applied
pub type LogCallback = Arc<dyn Fn(&[LogValue]) + Send + Sync>;

/// Leveled logger with optional console and file sinks
///
/// Every per-severity method runs the same pipeline:
///
/// 1. dispatch the registered callback for that severity (always, filter or
///    not),
/// 2. drop the call if its severity is below the configured minimum,
/// 3. format `<ISO-8601 UTC timestamp> [<SEVERITY>] <args>\n`,
/// 4. write the line to the file sink, then the console sink.
///
/// Everything is synchronous and blocking; a sink error aborts the rest of
/// the pipeline and surfaces to the caller. Options are immutable after
/// construction; only the callback table mutates, through [`Logger::on`].
pub struct Logger {
    options: LoggerOptions,
    file: FileSink,
    console: ConsoleSink,
    callbacks: RwLock<[Option<LogCallback>; 4]>,
}

impl Logger {
    /// Create a logger and apply the construction-time file policy
    ///
    /// With the file sink enabled and a path configured, any pre-existing
    /// file at the path is removed; with `clear_file_on_init` it is then
    /// recreated empty. A file sink enabled without a path is not an error
    /// here; it surfaces on the first write attempt.
    pub fn new(options: LoggerOptions) -> LogResult<Self> {
        let file = FileSink::new(options.log_file_path.clone());
        if options.log_to_file {
            file.prepare(options.clear_file_on_init)?;
        }
        Ok(Self {
            options,
            file,
            console: ConsoleSink::new(),
            callbacks: RwLock::new([None, None, None, None]),
        })
    }

    /// The options this logger was constructed with
    pub fn options(&self) -> &LoggerOptions {
        &self.options
    }

    /// Log at `DEBUG`
    pub fn debug(&self, args: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Debug, args)
    }

    /// Log at `INFO`
    pub fn info(&self, args: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Info, args)
    }

    /// Log at `WARN`
    pub fn warn(&self, args: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Warn, args)
    }

    /// Log at `ERROR`
    pub fn error(&self, args: &[LogValue]) -> LogResult<()> {
        self.log(Severity::Error, args)
    }

    /// Register `callback` for a severity name, replacing any prior one
    ///
    /// Names are the uppercase tags (`"DEBUG"`, `"INFO"`, `"WARN"`,
    /// `"ERROR"`). An unrecognized name is silently ignored and existing
    /// registrations stay as they were. At most one callback per severity.
    pub fn on<F>(&self, severity_name: &str, callback: F)
    where
        F: Fn(&[LogValue]) + Send + Sync + 'static,
    {
        let Some(severity) = Severity::from_name(severity_name) else {
            return;
        };
        let mut slots = self.callbacks.write().unwrap();
        slots[severity.ordinal() as usize] = Some(Arc::new(callback));
    }

    /// The shared pipeline behind the per-severity methods
    fn log(&self, severity: Severity, args: &[LogValue]) -> LogResult<()> {
        // Clone the slot out of the guard before invoking, so a callback may
        // itself call `on` without deadlocking.
        let callback = {
            let slots = self.callbacks.read().unwrap();
            slots[severity.ordinal() as usize].clone()
        };
        if let Some(callback) = callback {
            callback(args);
        }

        if severity < self.options.level {
            return Ok(());
        }

        let line = format_line(severity, args);
        if self.options.log_to_file {
            self.file.append(&line)?;
        }
        if self.options.log_to_console {
            self.console.write_line(&line)?;
        }
        Ok(())
    }
}

/// Render one log line: `<ISO-8601 UTC ms> [<SEVERITY>] <args>\n`
fn format_line(severity: Severity, args: &[LogValue]) -> String {
    let timestamp = Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true);
    format!("{} [{}] {}\n", timestamp, severity, join_values(args))
}

/// Log at `DEBUG` through a logger, with variadic printable arguments
#[macro_export]
macro_rules! log_debug {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.debug(&$crate::log_args![$($arg),*])
    };
}

/// Log at `INFO` through a logger, with variadic printable arguments
#[macro_export]
macro_rules! log_info {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.info(&$crate::log_args![$($arg),*])
    };
}

/// Log at `WARN` through a logger, with variadic printable arguments
#[macro_export]
macro_rules! log_warn {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.warn(&$crate::log_args![$($arg),*])
    };
}

/// Log at `ERROR` through a logger, with variadic printable arguments
#[macro_export]
macro_rules! log_error {
    ($logger:expr $(, $arg:expr)* $(,)?) => {
        $logger.error(&$crate::log_args![$($arg),*])
    };
}
