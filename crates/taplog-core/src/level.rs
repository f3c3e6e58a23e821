//! Log severity levels

use serde::{Deserialize, Serialize};

/// Severity of a log call, ordered from least to most severe
///
/// The derived ordering is what the minimum-level filter compares against:
/// a call is emitted iff its severity is at or above the configured minimum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    Debug = 0,
    #[default]
    Info = 1,
    Warn = 2,
    Error = 3,
}

impl Severity {
    /// All severities, in ordinal order
    pub const ALL: [Severity; 4] = [
        Severity::Debug,
        Severity::Info,
        Severity::Warn,
        Severity::Error,
    ];

    /// The uppercase tag rendered between brackets in formatted lines
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Debug => "DEBUG",
            Severity::Info => "INFO",
            Severity::Warn => "WARN",
            Severity::Error => "ERROR",
        }
    }

    /// Numeric ordinal used for minimum-level comparisons
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Resolve an uppercase tag back to a severity
    ///
    /// Returns `None` for anything outside the four recognized tags; callers
    /// that take names from outside (`Logger::on`) treat that as a no-op.
    pub fn from_name(name: &str) -> Option<Severity> {
        match name {
            "DEBUG" => Some(Severity::Debug),
            "INFO" => Some(Severity::Info),
            "WARN" => Some(Severity::Warn),
            "ERROR" => Some(Severity::Error),
            _ => None,
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
