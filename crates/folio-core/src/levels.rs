//! Console verbosity levels and log call kinds.
//!
//! [`ConsoleLevel`] is the configured threshold; [`LogKind`] tags each
//! façade call. A call prints when its severity is at or above the
//! threshold's, so `Silent` (the highest severity) permits nothing.

use serde::{Deserialize, Serialize};

/// Console output threshold, totally ordered by severity.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleLevel {
    /// Print everything.
    Info = 10,
    /// Print warnings and errors.
    Warning = 20,
    /// Print errors only.
    Error = 30,
    /// Print nothing.
    #[default]
    Silent = 40,
}

impl ConsoleLevel {
    /// Numeric severity (higher = more severe).
    #[must_use]
    pub const fn as_num(self) -> i32 {
        self as i32
    }

    /// Convert from string (case-insensitive).
    ///
    /// Unrecognized values map to [`ConsoleLevel::Silent`]: no [`LogKind`]
    /// satisfies the print comparison against it, so an unknown configured
    /// level silences output rather than failing.
    #[must_use]
    pub fn from_str_lossy(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "info" => Self::Info,
            "warn" | "warning" => Self::Warning,
            "error" => Self::Error,
            _ => Self::Silent,
        }
    }
}

impl std::fmt::Display for ConsoleLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Info => write!(f, "info"),
            Self::Warning => write!(f, "warning"),
            Self::Error => write!(f, "error"),
            Self::Silent => write!(f, "silent"),
        }
    }
}

/// The type tag of a façade call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LogKind {
    /// Informational message.
    Info,
    /// Non-fatal issue.
    Warning,
    /// Handled error.
    Error,
    /// Error that escaped all handlers.
    UncaughtError,
    /// Measured metric.
    Metric,
}

impl LogKind {
    /// The severity used for print gating.
    ///
    /// Metrics gate at info severity; uncaught errors gate at error
    /// severity. Compared against [`ConsoleLevel::as_num`].
    #[must_use]
    pub const fn severity(self) -> i32 {
        match self {
            Self::Info | Self::Metric => ConsoleLevel::Info.as_num(),
            Self::Warning => ConsoleLevel::Warning.as_num(),
            Self::Error | Self::UncaughtError => ConsoleLevel::Error.as_num(),
        }
    }

    /// Canonical string form, as it appears in the console prefix.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Warning => "warning",
            Self::Error => "error",
            Self::UncaughtError => "uncaught_error",
            Self::Metric => "metric",
        }
    }
}

impl std::fmt::Display for LogKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
