//! Error types for the telemetry persistence path.
//!
//! [`TelemetryError`] covers the save/sink pipeline only. Absence of a
//! collector is never an error anywhere in this workspace; calls that
//! need one degrade to a no-op by contract.

use thiserror::Error;

/// Errors that can occur while persisting telemetry batches.
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Sink I/O failed.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Payload serialization failed.
    #[error("serde error: {0}")]
    Serde(#[from] serde_json::Error),

    /// A save was requested but no sink is configured.
    #[error("no sink configured for save")]
    SinkUnavailable,
}

/// Convenience type alias for telemetry results.
pub type Result<T> = std::result::Result<T, TelemetryError>;

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let err = TelemetryError::Io(std::io::Error::other("disk full"));
        assert!(err.to_string().contains("io error"));
        assert!(err.to_string().contains("disk full"));
    }

    #[test]
    fn serde_error_display() {
        let serde_err = serde_json::from_str::<String>("not json").unwrap_err();
        let err = TelemetryError::Serde(serde_err);
        assert!(err.to_string().contains("serde error"));
    }

    #[test]
    fn sink_unavailable_display() {
        let err = TelemetryError::SinkUnavailable;
        assert_eq!(err.to_string(), "no sink configured for save");
    }

    #[test]
    fn io_error_converts_via_from() {
        fn fails() -> Result<()> {
            Err(std::io::Error::other("boom"))?;
            Ok(())
        }
        assert!(matches!(fails(), Err(TelemetryError::Io(_))));
    }
}
