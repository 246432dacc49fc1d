//! The shipped [`RecordLogger`]: buffers records, saves batches.
//!
//! [`Collector`] accumulates per-kind record buffers and envelope
//! metadata behind one lock. `save` reshapes the requested kinds through
//! the batch transformers and writes a single [`SavePayload`] to the
//! sink. Save never touches the buffers; clearing is the separate
//! `clear_cache` step the façade sequences after a successful persist.

use std::sync::Arc;

use parking_lot::Mutex;
use serde_json::Value;

use folio_core::config::{FileInfo, LogConfig, NetworkOptions};
use folio_core::errors::{Result, TelemetryError};
use folio_core::records::{Batch, BatchKind, LogRecord, MetricRecord, now_rfc3339};

use crate::batch::{transform, transform_metrics};
use crate::facade::RecordLogger;
use crate::sink::{BatchSink, SavePayload};

/// Buffers plus envelope metadata, guarded together.
#[derive(Default)]
struct State {
    info: Vec<LogRecord>,
    warning: Vec<LogRecord>,
    // Uncaught errors share this buffer: both persist under the ERROR kind.
    error: Vec<LogRecord>,
    metrics: Vec<MetricRecord>,
    file: Option<FileInfo>,
    content_type: Option<String>,
    network: NetworkOptions,
}

/// Buffering record logger with a pluggable persistence sink.
pub struct Collector {
    saving_enabled: bool,
    initial_network: NetworkOptions,
    sink: Option<Arc<dyn BatchSink>>,
    state: Mutex<State>,
}

impl Collector {
    /// Create a collector without a sink.
    ///
    /// Records buffer normally (when `saving_enabled`), but `save`
    /// returns [`TelemetryError::SinkUnavailable`] until a sink-bearing
    /// collector is used instead.
    #[must_use]
    pub fn new(config: &LogConfig) -> Self {
        Self::build(config, None)
    }

    /// Create a collector that persists through `sink`.
    #[must_use]
    pub fn with_sink(config: &LogConfig, sink: Arc<dyn BatchSink>) -> Self {
        Self::build(config, Some(sink))
    }

    fn build(config: &LogConfig, sink: Option<Arc<dyn BatchSink>>) -> Self {
        let network = config.network_options();
        Self {
            saving_enabled: config.saving_enabled,
            initial_network: network.clone(),
            sink,
            state: Mutex::new(State {
                network,
                ..Default::default()
            }),
        }
    }

    /// Number of buffered log records for `kind` (metrics count their
    /// own buffer).
    #[must_use]
    pub fn buffered_len(&self, kind: BatchKind) -> usize {
        let state = self.state.lock();
        match kind {
            BatchKind::Info => state.info.len(),
            BatchKind::Warning => state.warning.len(),
            BatchKind::Error => state.error.len(),
            BatchKind::Metric => state.metrics.len(),
        }
    }

    /// Whether every buffer is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        let state = self.state.lock();
        state.info.is_empty()
            && state.warning.is_empty()
            && state.error.is_empty()
            && state.metrics.is_empty()
    }

    fn push(&self, kind: BatchKind, message: &Value) {
        if !self.saving_enabled {
            return;
        }
        let record = LogRecord::new(message.clone());
        let mut state = self.state.lock();
        match kind {
            BatchKind::Info => state.info.push(record),
            BatchKind::Warning => state.warning.push(record),
            BatchKind::Error => state.error.push(record),
            BatchKind::Metric => unreachable!("metrics buffer via push_metric"),
        }
    }

    fn batch_for(state: &State, kind: BatchKind) -> Batch {
        match kind {
            BatchKind::Info => transform(kind, &state.info),
            BatchKind::Warning => transform(kind, &state.warning),
            BatchKind::Error => transform(kind, &state.error),
            BatchKind::Metric => transform_metrics(&state.metrics),
        }
    }
}

impl RecordLogger for Collector {
    fn info(&self, message: &Value) {
        self.push(BatchKind::Info, message);
    }

    fn warn(&self, message: &Value) {
        self.push(BatchKind::Warning, message);
    }

    fn error(&self, message: &Value) {
        self.push(BatchKind::Error, message);
    }

    fn uncaught_error(&self, message: &Value) {
        self.push(BatchKind::Error, message);
    }

    fn metric(&self, code: &str, value: &Value) {
        if !self.saving_enabled {
            return;
        }
        let record = MetricRecord::new(code, value.clone());
        self.state.lock().metrics.push(record);
    }

    fn set_file(&self, file: FileInfo) {
        self.state.lock().file = Some(file);
    }

    fn set_content_type(&self, content_type: &str) {
        self.state.lock().content_type = Some(content_type.to_string());
    }

    fn setup_network_layer(&self, options: NetworkOptions) {
        self.state.lock().network = options;
    }

    fn reset(&self) {
        let mut state = self.state.lock();
        *state = State {
            network: self.initial_network.clone(),
            ..Default::default()
        };
    }

    fn save(&self, kinds: &[BatchKind]) -> Result<()> {
        let sink = self.sink.as_ref().ok_or(TelemetryError::SinkUnavailable)?;

        let payload = {
            let state = self.state.lock();
            SavePayload {
                timestamp: now_rfc3339(),
                file: state.file.clone(),
                content_type: state.content_type.clone(),
                network: state.network.clone(),
                batches: kinds.iter().map(|&kind| Self::batch_for(&state, kind)).collect(),
            }
        };

        sink.write(&payload)
    }

    fn clear_cache(&self) {
        let mut state = self.state.lock();
        state.info.clear();
        state.warning.clear();
        state.error.clear();
        state.metrics.clear();
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facade::Facade;
    use crate::sink::MemorySink;
    use folio_core::events::CONTROL_EVENT_CODE;
    use folio_core::levels::ConsoleLevel;
    use serde_json::json;

    fn saving_config() -> LogConfig {
        LogConfig {
            saving_enabled: true,
            app_host: Some("viewer.example.com".to_string()),
            locale: Some("en-US".to_string()),
            ..Default::default()
        }
    }

    fn collector_with_memory_sink() -> (Collector, Arc<MemorySink>) {
        let sink = Arc::new(MemorySink::new());
        let collector = Collector::with_sink(&saving_config(), sink.clone());
        (collector, sink)
    }

    // ── buffering ────────────────────────────────────────────────────

    #[test]
    fn records_buffer_per_kind() {
        let (collector, _sink) = collector_with_memory_sink();
        collector.info(&json!("i"));
        collector.warn(&json!("w"));
        collector.error(&json!("e"));
        collector.metric("m", &json!(1));

        assert_eq!(collector.buffered_len(BatchKind::Info), 1);
        assert_eq!(collector.buffered_len(BatchKind::Warning), 1);
        assert_eq!(collector.buffered_len(BatchKind::Error), 1);
        assert_eq!(collector.buffered_len(BatchKind::Metric), 1);
    }

    #[test]
    fn uncaught_errors_share_the_error_buffer() {
        let (collector, _sink) = collector_with_memory_sink();
        collector.error(&json!("handled"));
        collector.uncaught_error(&json!("escaped"));

        assert_eq!(collector.buffered_len(BatchKind::Error), 2);
    }

    #[test]
    fn saving_disabled_drops_records_on_arrival() {
        let sink = Arc::new(MemorySink::new());
        let collector = Collector::with_sink(&LogConfig::default(), sink);
        collector.info(&json!("dropped"));
        collector.metric("m", &json!(1));

        assert!(collector.is_empty());
    }

    // ── save ─────────────────────────────────────────────────────────

    #[test]
    fn save_writes_batches_in_request_order() {
        let (collector, sink) = collector_with_memory_sink();
        collector.error(&json!("boom"));
        collector.metric("load_time", &json!(125));

        collector.save(&[BatchKind::Error, BatchKind::Metric]).unwrap();

        let payloads = sink.payloads();
        assert_eq!(payloads.len(), 1);
        let payload = &payloads[0];
        assert_eq!(payload.batches.len(), 2);
        assert_eq!(payload.batches[0].event_type, BatchKind::Error);
        assert_eq!(payload.batches[0].events[0].value, json!("boom"));
        assert_eq!(payload.batches[1].event_type, BatchKind::Metric);
        assert_eq!(payload.batches[1].events[0].code, "load_time");
    }

    #[test]
    fn save_includes_envelope_metadata() {
        let (collector, sink) = collector_with_memory_sink();
        collector.set_file(FileInfo {
            id: "f_1".to_string(),
            version: Some("v3".to_string()),
            extension: None,
        });
        collector.set_content_type("application/pdf");

        collector.save(&[BatchKind::Error]).unwrap();

        let payloads = sink.payloads();
        let payload = &payloads[0];
        assert_eq!(payload.file.as_ref().unwrap().id, "f_1");
        assert_eq!(payload.content_type.as_deref(), Some("application/pdf"));
        // Options from construction config flow into the envelope.
        assert_eq!(payload.network.app_host.as_deref(), Some("viewer.example.com"));
        assert_eq!(payload.network.locale.as_deref(), Some("en-US"));
    }

    #[test]
    fn setup_network_layer_replaces_endpoint_options() {
        let (collector, sink) = collector_with_memory_sink();
        collector.setup_network_layer(NetworkOptions {
            log_url: Some("https://other.example.com".to_string()),
            ..Default::default()
        });

        collector.save(&[BatchKind::Error]).unwrap();

        let payloads = sink.payloads();
        let payload = &payloads[0];
        assert_eq!(
            payload.network.log_url.as_deref(),
            Some("https://other.example.com")
        );
        assert!(payload.network.app_host.is_none());
    }

    #[test]
    fn save_leaves_buffers_untouched() {
        let (collector, sink) = collector_with_memory_sink();
        collector.error(&json!("boom"));

        collector.save(&[BatchKind::Error]).unwrap();
        collector.save(&[BatchKind::Error]).unwrap();

        assert_eq!(collector.buffered_len(BatchKind::Error), 1);
        let payloads = sink.payloads();
        assert_eq!(payloads[0].batches[0].events.len(), 1);
        assert_eq!(payloads[1].batches[0].events.len(), 1);
    }

    #[test]
    fn save_with_empty_buffers_writes_empty_batches() {
        let (collector, sink) = collector_with_memory_sink();
        collector.save(&[BatchKind::Error, BatchKind::Metric]).unwrap();

        let payloads = sink.payloads();
        let payload = &payloads[0];
        assert!(payload.batches[0].events.is_empty());
        assert!(payload.batches[1].events.is_empty());
    }

    #[test]
    fn save_without_sink_is_unavailable() {
        let collector = Collector::new(&saving_config());
        collector.error(&json!("boom"));

        let err = collector.save(&[BatchKind::Error]).unwrap_err();
        assert!(matches!(err, TelemetryError::SinkUnavailable));
        // The buffer survives the failed save.
        assert_eq!(collector.buffered_len(BatchKind::Error), 1);
    }

    #[test]
    fn save_coalesces_control_metrics() {
        let (collector, sink) = collector_with_memory_sink();
        collector.metric("m1", &json!(5));
        collector.metric(CONTROL_EVENT_CODE, &json!("m1"));

        collector.save(&[BatchKind::Metric]).unwrap();

        let payloads = sink.payloads();
        let batch = &payloads[0].batches[0];
        assert_eq!(batch.events.len(), 2);
        assert_eq!(batch.events[1].code, CONTROL_EVENT_CODE);
        assert_eq!(batch.events[1].value, json!(["m1"]));
    }

    // ── clear_cache / reset ──────────────────────────────────────────

    #[test]
    fn clear_cache_empties_all_buffers() {
        let (collector, _sink) = collector_with_memory_sink();
        collector.info(&json!("i"));
        collector.warn(&json!("w"));
        collector.error(&json!("e"));
        collector.metric("m", &json!(1));

        collector.clear_cache();
        assert!(collector.is_empty());
    }

    #[test]
    fn clear_cache_keeps_envelope_metadata() {
        let (collector, sink) = collector_with_memory_sink();
        collector.set_content_type("application/pdf");
        collector.clear_cache();

        collector.save(&[BatchKind::Error]).unwrap();
        assert_eq!(
            sink.payloads()[0].content_type.as_deref(),
            Some("application/pdf")
        );
    }

    #[test]
    fn reset_restores_construction_state() {
        let (collector, sink) = collector_with_memory_sink();
        collector.error(&json!("boom"));
        collector.set_content_type("application/pdf");
        collector.setup_network_layer(NetworkOptions::default());

        collector.reset();

        assert!(collector.is_empty());
        collector.save(&[BatchKind::Error]).unwrap();
        let payloads = sink.payloads();
        let payload = &payloads[0];
        assert!(payload.content_type.is_none());
        // Endpoint options fall back to the construction config.
        assert_eq!(payload.network.app_host.as_deref(), Some("viewer.example.com"));
    }

    // ── through the façade ───────────────────────────────────────────

    #[test]
    fn facade_save_persists_then_clears() {
        let sink = Arc::new(MemorySink::new());
        let collector = Arc::new(Collector::with_sink(&saving_config(), sink.clone()));
        let facade = Facade::new(
            &LogConfig {
                console_level: ConsoleLevel::Silent,
                ..saving_config()
            },
            Some(collector.clone()),
        );

        facade.error("boom");
        facade.metric("load_time", &json!(125));
        facade.save().unwrap();

        // Persisted ERROR then METRIC, and the buffers were cleared after.
        let payloads = sink.payloads();
        assert_eq!(payloads.len(), 1);
        assert_eq!(payloads[0].batches[0].event_type, BatchKind::Error);
        assert_eq!(payloads[0].batches[0].events.len(), 1);
        assert_eq!(payloads[0].batches[1].event_type, BatchKind::Metric);
        assert_eq!(payloads[0].batches[1].events.len(), 1);
        assert!(collector.is_empty());
    }

    #[test]
    fn facade_save_failure_preserves_buffers() {
        let collector = Arc::new(Collector::new(&saving_config()));
        let facade = Facade::new(&saving_config(), Some(collector.clone()));

        facade.error("boom");
        assert!(facade.save().is_err());
        assert_eq!(collector.buffered_len(BatchKind::Error), 1);
    }
}
