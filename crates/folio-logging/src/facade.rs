//! The log façade: console gating plus forwarding to a collector.
//!
//! [`Facade`] owns the console threshold and an optional reference to a
//! [`RecordLogger`] capability. Console output goes through `tracing`
//! (warning → warn channel, error/uncaught-error → error channel,
//! everything else → info channel), formatted `"[<kind>] <message>"`.
//! Forwarding is independent of printing, and every collector-requiring
//! call degrades to a no-op when no collector was injected; nothing in
//! this module errors or panics on its absence.

use std::sync::Arc;

use serde_json::Value;

use folio_core::config::{FileInfo, LogConfig, NetworkOptions};
use folio_core::errors::Result;
use folio_core::levels::{ConsoleLevel, LogKind};
use folio_core::records::BatchKind;

/// Capability set of the host-side record logger the façade forwards to.
///
/// The shipped implementation is [`Collector`](crate::collector::Collector);
/// hosts may substitute their own.
pub trait RecordLogger: Send + Sync {
    /// Record an informational message.
    fn info(&self, message: &Value);
    /// Record a warning.
    fn warn(&self, message: &Value);
    /// Record a handled error.
    fn error(&self, message: &Value);
    /// Record an error that escaped all handlers.
    fn uncaught_error(&self, message: &Value);
    /// Record a metric observation.
    fn metric(&self, code: &str, value: &Value);
    /// Attach the viewed file's identity to subsequent saves.
    fn set_file(&self, file: FileInfo);
    /// Attach the viewed representation's content type to subsequent saves.
    fn set_content_type(&self, content_type: &str);
    /// Store endpoint options for the save envelope.
    fn setup_network_layer(&self, options: NetworkOptions);
    /// Drop all buffered records and envelope metadata.
    fn reset(&self);
    /// Persist the requested batch kinds. Buffers are left untouched.
    fn save(&self, kinds: &[BatchKind]) -> Result<()>;
    /// Drop all buffered records.
    fn clear_cache(&self);
}

/// Console-gating log façade with an optional injected collector.
pub struct Facade {
    level: ConsoleLevel,
    logger: Option<Arc<dyn RecordLogger>>,
}

impl Facade {
    /// Create a façade from config plus an optional collector.
    ///
    /// Only `console_level` is consumed here; the rest of the config
    /// parameterizes the collector the caller constructed (or chose not
    /// to).
    #[must_use]
    pub fn new(config: &LogConfig, logger: Option<Arc<dyn RecordLogger>>) -> Self {
        Self {
            level: config.console_level,
            logger,
        }
    }

    /// Set the console threshold.
    pub fn set_level(&mut self, level: ConsoleLevel) {
        self.level = level;
    }

    /// The current console threshold.
    #[must_use]
    pub fn level(&self) -> ConsoleLevel {
        self.level
    }

    /// Whether a call of `kind` prints under the current threshold.
    #[must_use]
    pub fn can_print(&self, kind: LogKind) -> bool {
        kind.severity() >= self.level.as_num()
    }

    /// Log a message of the given kind.
    ///
    /// Prints when permitted, then forwards the unchanged message to the
    /// collector if one is present. Metric calls go through
    /// [`metric`](Self::metric); `log` with [`LogKind::Metric`] only
    /// prints.
    pub fn log(&self, kind: LogKind, message: &Value) {
        self.print(kind, &display_value(message));

        let Some(logger) = &self.logger else { return };
        match kind {
            LogKind::Info => logger.info(message),
            LogKind::Warning => logger.warn(message),
            LogKind::Error => logger.error(message),
            LogKind::UncaughtError => logger.uncaught_error(message),
            LogKind::Metric => {}
        }
    }

    /// Log an informational message.
    pub fn info(&self, message: impl Into<Value>) {
        self.log(LogKind::Info, &message.into());
    }

    /// Log a warning.
    pub fn warn(&self, message: impl Into<Value>) {
        self.log(LogKind::Warning, &message.into());
    }

    /// Log a handled error.
    pub fn error(&self, message: impl Into<Value>) {
        self.log(LogKind::Error, &message.into());
    }

    /// Log an error that escaped all handlers.
    pub fn uncaught_error(&self, message: impl Into<Value>) {
        self.log(LogKind::UncaughtError, &message.into());
    }

    /// Record a metric observation.
    ///
    /// Print-gated at info severity; forwards `(code, value)` unchanged.
    pub fn metric(&self, code: impl AsRef<str>, value: &Value) {
        let code = code.as_ref();
        self.print(
            LogKind::Metric,
            &format!("{code} {}", display_value(value)),
        );
        if let Some(logger) = &self.logger {
            logger.metric(code, value);
        }
    }

    /// Attach the viewed file's identity. No-op without a collector.
    pub fn set_file(&self, file: FileInfo) {
        if let Some(logger) = &self.logger {
            logger.set_file(file);
        }
    }

    /// Attach the content type. No-op without a collector.
    pub fn set_content_type(&self, content_type: &str) {
        if let Some(logger) = &self.logger {
            logger.set_content_type(content_type);
        }
    }

    /// Store endpoint options. No-op without a collector.
    pub fn setup_network_layer(&self, options: NetworkOptions) {
        if let Some(logger) = &self.logger {
            logger.setup_network_layer(options);
        }
    }

    /// Reset the collector to its construction state. No-op without one.
    pub fn reset(&self) {
        if let Some(logger) = &self.logger {
            logger.reset();
        }
    }

    /// Persist error and metric records, then clear the buffer.
    ///
    /// Persist strictly precedes clear: a failed persist leaves the
    /// buffers intact and returns the error; a successful persist is not
    /// undone by the clear. No-op without a collector.
    pub fn save(&self) -> Result<()> {
        let Some(logger) = &self.logger else {
            return Ok(());
        };
        logger.save(&[BatchKind::Error, BatchKind::Metric])?;
        logger.clear_cache();
        Ok(())
    }

    fn print(&self, kind: LogKind, text: &str) {
        if !self.can_print(kind) {
            return;
        }
        match kind {
            LogKind::Warning => tracing::warn!("[{kind}] {text}"),
            LogKind::Error | LogKind::UncaughtError => tracing::error!("[{kind}] {text}"),
            LogKind::Info | LogKind::Metric => tracing::info!("[{kind}] {text}"),
        }
    }
}

/// Render a message value for the console: bare strings print without
/// quotes, everything else as compact JSON.
fn display_value(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
