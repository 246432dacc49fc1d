//! Persistence seam for saved telemetry batches.
//!
//! The collector hands each save to a [`BatchSink`] as a single
//! [`SavePayload`] envelope. [`JsonFileSink`] is the shipped default:
//! one JSON document per line, appended. Hosts with a real transport
//! implement the trait themselves.

use std::io::Write;
use std::path::PathBuf;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use folio_core::config::{FileInfo, NetworkOptions};
use folio_core::errors::Result;
use folio_core::records::Batch;

/// The envelope written on each save.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavePayload {
    /// RFC 3339 save time.
    pub timestamp: String,
    /// Identity of the viewed file, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileInfo>,
    /// Content type of the viewed representation, when set.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    /// Endpoint options stored via `setup_network_layer`.
    #[serde(flatten)]
    pub network: NetworkOptions,
    /// One batch per requested kind, in request order.
    pub batches: Vec<Batch>,
}

/// Destination for save payloads.
pub trait BatchSink: Send + Sync {
    /// Persist one payload. Must be atomic from the caller's view: either
    /// the payload is durable on `Ok`, or nothing observable happened.
    fn write(&self, payload: &SavePayload) -> Result<()>;
}

/// Appends each payload as one JSON line to a file.
///
/// Parent directories are created on first write.
pub struct JsonFileSink {
    path: PathBuf,
}

impl JsonFileSink {
    /// Create a sink targeting `path`.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The target path.
    #[must_use]
    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl BatchSink for JsonFileSink {
    fn write(&self, payload: &SavePayload) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let mut line = serde_json::to_string(payload)?;
        line.push('\n');
        let mut file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        file.write_all(line.as_bytes())?;
        Ok(())
    }
}

/// In-memory sink capturing every payload, for tests and embedding hosts
/// that drain payloads themselves.
#[derive(Default)]
pub struct MemorySink {
    payloads: Mutex<Vec<SavePayload>>,
}

impl MemorySink {
    /// Create an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All payloads written so far, in write order.
    #[must_use]
    pub fn payloads(&self) -> Vec<SavePayload> {
        self.payloads.lock().clone()
    }
}

impl BatchSink for MemorySink {
    fn write(&self, payload: &SavePayload) -> Result<()> {
        self.payloads.lock().push(payload.clone());
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
