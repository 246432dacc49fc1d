//! # folio-core
//!
//! Shared vocabulary for Folio viewer telemetry.
//!
//! This crate provides the types every other Folio crate speaks in:
//!
//! - **Levels**: [`ConsoleLevel`] threshold and [`LogKind`] call tags
//! - **Records**: [`LogRecord`] / [`MetricRecord`] buffered entries
//! - **Batches**: [`Batch`] / [`BatchEvent`] / [`BatchKind`] wire shapes
//! - **Constants**: [`ViewerEvent`] names, [`ErrorCode`]s, and the
//!   control-metric sentinel
//! - **Config**: [`LogConfig`] accepted at construction
//! - **Errors**: [`TelemetryError`] for the persistence path

#![deny(unsafe_code)]

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod levels;
pub mod records;

pub use config::{FileInfo, LogConfig, NetworkOptions};
pub use errors::{Result, TelemetryError};
pub use events::{ALL_ERROR_CODES, ALL_VIEWER_EVENTS, CONTROL_EVENT_CODE, ErrorCode, ViewerEvent};
pub use levels::{ConsoleLevel, LogKind};
pub use records::{Batch, BatchEvent, BatchKind, LogRecord, MetricRecord, now_rfc3339};
