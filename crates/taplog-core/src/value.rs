//! Printable argument values for log calls

use std::fmt;

/// A single log-call argument
///
/// Log methods take a slice of these instead of a fixed message type, so one
/// call can mix strings, numbers, booleans, and object-shaped values. The
/// [`log_args!`](crate::log_args) macro builds the slice from heterogeneous
/// expressions at the call site.
#[derive(Debug, Clone, PartialEq)]
pub enum LogValue {
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    /// Object-shaped argument, rendered as compact JSON
    Json(serde_json::Value),
}

impl fmt::Display for LogValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogValue::Bool(b) => write!(f, "{}", b),
            LogValue::Int(i) => write!(f, "{}", i),
            LogValue::Float(x) => write!(f, "{}", x),
            // Strings render raw, without quotes
            LogValue::Str(s) => f.write_str(s),
            LogValue::Json(v) => write!(f, "{}", v),
        }
    }
}

impl From<bool> for LogValue {
    fn from(b: bool) -> Self {
        LogValue::Bool(b)
    }
}

impl From<i32> for LogValue {
    fn from(i: i32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<i64> for LogValue {
    fn from(i: i64) -> Self {
        LogValue::Int(i)
    }
}

impl From<u32> for LogValue {
    fn from(i: u32) -> Self {
        LogValue::Int(i64::from(i))
    }
}

impl From<f32> for LogValue {
    fn from(x: f32) -> Self {
        LogValue::Float(f64::from(x))
    }
}

impl From<f64> for LogValue {
    fn from(x: f64) -> Self {
        LogValue::Float(x)
    }
}

impl From<&str> for LogValue {
    fn from(s: &str) -> Self {
        LogValue::Str(s.to_string())
    }
}

impl From<String> for LogValue {
    fn from(s: String) -> Self {
        LogValue::Str(s)
    }
}

impl From<serde_json::Value> for LogValue {
    fn from(v: serde_json::Value) -> Self {
        LogValue::Json(v)
    }
}

/// Join rendered arguments with single spaces, the message body of a line
pub(crate) fn join_values(args: &[LogValue]) -> String {
    args.iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Build a `Vec<LogValue>` from heterogeneous printable expressions
///
/// # Example
///
/// ```rust,ignore
/// logger.info(&log_args!["request finished", 200, true])?;
/// ```
#[macro_export]
macro_rules! log_args {
    () => {
        ::std::vec::Vec::<$crate::LogValue>::new()
    };
    ($($arg:expr),+ $(,)?) => {
        vec![$($crate::LogValue::from($arg)),+]
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_joined_rendering() {
        let args = log_args!["a", 1, true];
        assert_eq!(join_values(&args), "a 1 true");
    }

    #[test]
    fn test_strings_render_unquoted() {
        assert_eq!(LogValue::from("hello world").to_string(), "hello world");
    }

    #[test]
    fn test_numbers_and_bools() {
        assert_eq!(LogValue::from(42).to_string(), "42");
        assert_eq!(LogValue::from(-7i64).to_string(), "-7");
        assert_eq!(LogValue::from(2.5).to_string(), "2.5");
        assert_eq!(LogValue::from(false).to_string(), "false");
    }

    #[test]
    fn test_json_renders_compact() {
        let value = LogValue::from(serde_json::json!({"port": 8080}));
        assert_eq!(value.to_string(), r#"{"port":8080}"#);
    }

    #[test]
    fn test_empty_args() {
        let args = log_args![];
        assert!(args.is_empty());
        assert_eq!(join_values(&args), "");
    }
}
