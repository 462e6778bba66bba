//! Severity levels.

use std::{fmt, str::FromStr};

use thiserror::Error;

/// Severity of a log event.
///
/// Levels are ordered from least to most severe. `None` sorts last and means
/// "disabled": no sink is ever enabled for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LogLevel {
    /// Most detailed diagnostics.
    Trace,
    /// Development-time diagnostics.
    Debug,
    /// General flow of the application.
    #[cfg_attr(feature = "serde", serde(alias = "info"))]
    Information,
    /// Unexpected but recoverable events. Subject to warning policy.
    #[cfg_attr(feature = "serde", serde(alias = "warn"))]
    Warning,
    /// Failures of the current operation.
    Error,
    /// Unrecoverable failures.
    Critical,
    /// Disables logging.
    None,
}

impl LogLevel {
    /// All levels that can actually be emitted, in ascending severity.
    pub const EMITTABLE: [LogLevel; 6] = [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Information,
        LogLevel::Warning,
        LogLevel::Error,
        LogLevel::Critical,
    ];

    /// Returns the lowercase name of the level.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            LogLevel::Trace => "trace",
            LogLevel::Debug => "debug",
            LogLevel::Information => "information",
            LogLevel::Warning => "warning",
            LogLevel::Error => "error",
            LogLevel::Critical => "critical",
            LogLevel::None => "none",
        }
    }

    /// Returns true when `self` passes a `minimum` level filter.
    ///
    /// `None` never passes, and a `None` minimum lets nothing through.
    #[must_use]
    pub fn passes(self, minimum: LogLevel) -> bool {
        self != LogLevel::None && minimum != LogLevel::None && self >= minimum
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a string does not name a [`LogLevel`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown log level `{input}`; expected one of trace, debug, information, warning, error, critical, none")]
pub struct ParseLevelError {
    input: String,
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "trace" => Ok(LogLevel::Trace),
            "debug" => Ok(LogLevel::Debug),
            "information" | "info" => Ok(LogLevel::Information),
            "warning" | "warn" => Ok(LogLevel::Warning),
            "error" => Ok(LogLevel::Error),
            "critical" | "crit" => Ok(LogLevel::Critical),
            "none" | "off" => Ok(LogLevel::None),
            _ => Err(ParseLevelError {
                input: s.to_string(),
            }),
        }
    }
}
