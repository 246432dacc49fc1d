//! Batch transformers: reshape buffered records into wire payloads.
//!
//! Pure functions, no shared state, no side effects beyond allocating the
//! returned [`Batch`]. Input order is preserved for every non-control
//! entry; control metrics coalesce into exactly one trailing synthetic
//! event stamped at transform time.

use serde_json::Value;

use folio_core::events::CONTROL_EVENT_CODE;
use folio_core::records::{Batch, BatchEvent, BatchKind, LogRecord, MetricRecord, now_rfc3339};

/// Group log records of one kind into a [`Batch`].
///
/// Every record maps, in order, to an event whose `code` is the kind's
/// wire string and whose `value` is the record's opaque message. Metric
/// batches are built by [`transform_metrics`] instead.
#[must_use]
pub fn transform(kind: BatchKind, records: &[LogRecord]) -> Batch {
    let events = records
        .iter()
        .map(|record| BatchEvent {
            timestamp: record.timestamp.clone(),
            code: kind.as_str().to_string(),
            value: record.message.clone(),
        })
        .collect();
    Batch {
        event_type: kind,
        events,
    }
}

/// Group metric records into a [`Batch`], splitting out control events.
///
/// Single pass: records whose `code` equals [`CONTROL_EVENT_CODE`] are set
/// aside; all others map to events in input order. A non-empty set of
/// control records yields exactly one trailing synthetic event whose
/// `value` is the ordered list of the control records' values and whose
/// timestamp is the transform-call time, not any record's.
#[must_use]
pub fn transform_metrics(records: &[MetricRecord]) -> Batch {
    let mut events = Vec::with_capacity(records.len());
    let mut control_codes: Vec<Value> = Vec::new();

    for record in records {
        if record.code == CONTROL_EVENT_CODE {
            // The control record's *value* is the code it signals.
            control_codes.push(record.value.clone());
        } else {
            events.push(BatchEvent {
                timestamp: record.timestamp.clone(),
                code: record.code.clone(),
                value: record.value.clone(),
            });
        }
    }

    if !control_codes.is_empty() {
        events.push(BatchEvent {
            timestamp: now_rfc3339(),
            code: CONTROL_EVENT_CODE.to_string(),
            value: Value::Array(control_codes),
        });
    }

    Batch {
        event_type: BatchKind::Metric,
        events,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
