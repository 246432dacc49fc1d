//! # folio-logging
//!
//! Log façade, record collector, and batch transformers for Folio viewer
//! telemetry.
//!
//! - [`Facade`] gates console output by [`ConsoleLevel`](folio_core::ConsoleLevel)
//!   and forwards structured calls to an injected [`RecordLogger`]
//! - [`Collector`] is the shipped `RecordLogger`: per-kind buffers plus a
//!   pluggable [`BatchSink`]
//! - [`batch`] holds the pure transformers that reshape buffered records
//!   into grouped [`Batch`](folio_core::Batch) payloads
//!
//! The collector is an explicit constructor argument; there is no
//! ambient singleton. A host that wants the full pipeline wires it up:
//!
//! ```rust,ignore
//! let config = LogConfig { saving_enabled: true, ..Default::default() };
//! let sink = Arc::new(JsonFileSink::new("/var/log/folio/telemetry.jsonl"));
//! let collector = Arc::new(Collector::with_sink(&config, sink));
//! let facade = Facade::new(&config, Some(collector));
//! ```

#![deny(unsafe_code)]

pub mod batch;
pub mod collector;
pub mod facade;
pub mod sink;
pub mod test_utils;

pub use batch::{transform, transform_metrics};
pub use collector::Collector;
pub use facade::{Facade, RecordLogger};
pub use sink::{BatchSink, JsonFileSink, MemorySink, SavePayload};

/// Initialize the global tracing subscriber with stderr output.
///
/// Call once at host startup; subsequent calls are no-ops. Honors
/// `RUST_LOG` when set, otherwise uses `level`.
pub fn init_subscriber(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .compact();

    // set_global_default is a no-op if already set
    let _ = subscriber.try_init();
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn re_exports_work() {
        let _level = folio_core::ConsoleLevel::Info;
        let _batch = transform(folio_core::BatchKind::Info, &[]);
    }

    #[test]
    fn init_subscriber_does_not_panic() {
        // Multiple calls should be safe (no-op after first)
        init_subscriber("warn");
        init_subscriber("debug");
    }
}
