//! Log records and the grouped batch wire shape.
//!
//! [`LogRecord`] and [`MetricRecord`] are what the collector buffers;
//! the batch transformers reshape them into [`Batch`] payloads for
//! transmission. The batch wire shape keeps snake_case field names
//! (`event_type`), unlike the camelCase config and envelope surfaces.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A buffered log entry: a timestamp plus an opaque message.
///
/// Immutable once created. Produced on each log call, consumed only by
/// the batch transformer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LogRecord {
    /// RFC 3339 timestamp of the call.
    pub timestamp: String,
    /// Opaque message value, forwarded unchanged.
    pub message: Value,
}

impl LogRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(message: Value) -> Self {
        Self {
            timestamp: now_rfc3339(),
            message,
        }
    }
}

/// A buffered metric entry: a named code with a value.
///
/// A `code` equal to [`CONTROL_EVENT_CODE`](crate::events::CONTROL_EVENT_CODE)
/// marks the record as a control event rather than a measured metric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MetricRecord {
    /// RFC 3339 timestamp of the call.
    pub timestamp: String,
    /// Metric name.
    pub code: String,
    /// Measured value (or, for control events, the signaled code).
    pub value: Value,
}

impl MetricRecord {
    /// Create a record stamped with the current time.
    #[must_use]
    pub fn new(code: impl Into<String>, value: Value) -> Self {
        Self {
            timestamp: now_rfc3339(),
            code: code.into(),
            value,
        }
    }
}

/// Batch grouping discriminator. Serializes to the UPPERCASE wire string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BatchKind {
    /// Handled errors.
    Error,
    /// Warnings.
    Warning,
    /// Informational entries.
    Info,
    /// Metrics (including coalesced control events).
    Metric,
}

impl BatchKind {
    /// The wire string (`"ERROR"`, `"WARNING"`, `"INFO"`, `"METRIC"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Error => "ERROR",
            Self::Warning => "WARNING",
            Self::Info => "INFO",
            Self::Metric => "METRIC",
        }
    }
}

impl std::fmt::Display for BatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One event inside a [`Batch`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BatchEvent {
    /// RFC 3339 timestamp: the record's, or transform time for the
    /// synthetic control event.
    pub timestamp: String,
    /// Event code: the batch kind string, a metric name, or the control
    /// sentinel.
    pub code: String,
    /// Event value: the record's message, a metric value, or the ordered
    /// list of signaled control codes.
    pub value: Value,
}

/// A grouped payload of events of one kind.
///
/// Built fresh per transform call; has no identity beyond the call that
/// produced it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Batch {
    /// Grouping discriminator. Wire field name is exactly `event_type`.
    pub event_type: BatchKind,
    /// Ordered events.
    pub events: Vec<BatchEvent>,
}

/// Current time as RFC 3339 with millisecond precision.
#[must_use]
pub fn now_rfc3339() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn log_record_new_stamps_rfc3339() {
        let record = LogRecord::new(json!("hello"));
        // RFC 3339 with millis: 2026-01-15T12:00:00.000Z
        assert!(record.timestamp.ends_with('Z'));
        assert!(record.timestamp.contains('T'));
        assert_eq!(record.message, json!("hello"));
    }

    #[test]
    fn metric_record_new() {
        let record = MetricRecord::new("load_time", json!(125));
        assert_eq!(record.code, "load_time");
        assert_eq!(record.value, json!(125));
        assert!(record.timestamp.ends_with('Z'));
    }

    #[test]
    fn batch_kind_wire_strings() {
        assert_eq!(BatchKind::Error.as_str(), "ERROR");
        assert_eq!(BatchKind::Warning.as_str(), "WARNING");
        assert_eq!(BatchKind::Info.as_str(), "INFO");
        assert_eq!(BatchKind::Metric.as_str(), "METRIC");
    }

    #[test]
    fn batch_kind_serde_matches_as_str() {
        for kind in [
            BatchKind::Error,
            BatchKind::Warning,
            BatchKind::Info,
            BatchKind::Metric,
        ] {
            let json = serde_json::to_value(kind).unwrap();
            assert_eq!(json, Value::String(kind.as_str().to_string()));
        }
    }

    #[test]
    fn batch_serializes_event_type_field() {
        let batch = Batch {
            event_type: BatchKind::Warning,
            events: vec![],
        };
        let json = serde_json::to_value(&batch).unwrap();
        assert_eq!(json["event_type"], "WARNING");
        assert_eq!(json["events"], json!([]));
    }

    #[test]
    fn batch_event_serializes_all_fields() {
        let event = BatchEvent {
            timestamp: "t1".to_string(),
            code: "ERROR".to_string(),
            value: json!("boom"),
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json, json!({"timestamp": "t1", "code": "ERROR", "value": "boom"}));
    }

    #[test]
    fn batch_roundtrip() {
        let batch = Batch {
            event_type: BatchKind::Metric,
            events: vec![BatchEvent {
                timestamp: "t1".to_string(),
                code: "load_time".to_string(),
                value: json!(5),
            }],
        };
        let json = serde_json::to_string(&batch).unwrap();
        let back: Batch = serde_json::from_str(&json).unwrap();
        assert_eq!(back, batch);
    }

    #[test]
    fn now_rfc3339_has_millis() {
        let ts = now_rfc3339();
        // e.g. 2026-08-06T12:00:00.123Z with exactly three fractional digits.
        let frac = ts.split('.').nth(1).expect("fractional part");
        assert_eq!(frac.len(), "123Z".len());
    }
}
