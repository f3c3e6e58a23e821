//! Output sinks for formatted log lines

mod console;
mod file;

pub use console::ConsoleSink;
pub use file::FileSink;
