//! Viewer event names, error codes, and the control-metric sentinel.
//!
//! These are the opaque string identifiers the viewer and its host agree
//! on. Every variant has an exact `#[serde(rename)]` matching the wire
//! string; [`ViewerEvent::as_str`] and [`ErrorCode::as_str`] are the
//! canonical forms.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reserved metric code marking a control event.
///
/// A metric record carrying this code signals meta-information about a
/// group of action events rather than a measured value; the batch
/// transformer coalesces such records into a single trailing event.
pub const CONTROL_EVENT_CODE: &str = "control_event";

/// Named events emitted by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ViewerEvent {
    /// File download requested.
    #[serde(rename = "download")]
    Download,
    /// Viewer reloaded.
    #[serde(rename = "reload")]
    Reload,
    /// Content finished loading.
    #[serde(rename = "load")]
    Load,
    /// Progress indicator shown.
    #[serde(rename = "progressstart")]
    ProgressStart,
    /// Progress indicator hidden.
    #[serde(rename = "progressend")]
    ProgressEnd,
    /// Notification shown.
    #[serde(rename = "notificationshow")]
    NotificationShow,
    /// Notification hidden.
    #[serde(rename = "notificationhide")]
    NotificationHide,
    /// Media autoplay reached the end.
    #[serde(rename = "mediaendautoplay")]
    MediaEndAutoplay,
    /// Viewer-level error.
    #[serde(rename = "error")]
    Error,
    /// Generic viewer event carrying its own payload.
    #[serde(rename = "viewerevent")]
    ViewerEvent,
}

/// All viewer event variants in definition order.
pub const ALL_VIEWER_EVENTS: [ViewerEvent; 10] = [
    ViewerEvent::Download,
    ViewerEvent::Reload,
    ViewerEvent::Load,
    ViewerEvent::ProgressStart,
    ViewerEvent::ProgressEnd,
    ViewerEvent::NotificationShow,
    ViewerEvent::NotificationHide,
    ViewerEvent::MediaEndAutoplay,
    ViewerEvent::Error,
    ViewerEvent::ViewerEvent,
];

impl ViewerEvent {
    /// The canonical wire string (e.g. `"progressstart"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Reload => "reload",
            Self::Load => "load",
            Self::ProgressStart => "progressstart",
            Self::ProgressEnd => "progressend",
            Self::NotificationShow => "notificationshow",
            Self::NotificationHide => "notificationhide",
            Self::MediaEndAutoplay => "mediaendautoplay",
            Self::Error => "error",
            Self::ViewerEvent => "viewerevent",
        }
    }
}

impl fmt::Display for ViewerEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewerEvent {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        // The `#[serde(rename)]` attributes are the source of truth.
        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(|_| format!("unknown viewer event: {s}"))
    }
}

/// Error codes reported by the viewer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorCode {
    /// Annotations failed to load.
    #[serde(rename = "error_annotations_load")]
    AnnotationsLoad,
    /// File representation was not cacheable.
    #[serde(rename = "error_invalid_file_for_cache")]
    InvalidFileForCache,
    /// Prefetch was asked for an unknown file ID.
    #[serde(rename = "error_prefetch_file_id")]
    PrefetchFileId,
    /// Upstream rate limit hit.
    #[serde(rename = "error_rate_limit")]
    RateLimit,
    /// Retry budget exhausted.
    #[serde(rename = "error_retries_exceeded")]
    RetriesExceeded,
}

/// All error code variants in definition order.
pub const ALL_ERROR_CODES: [ErrorCode; 5] = [
    ErrorCode::AnnotationsLoad,
    ErrorCode::InvalidFileForCache,
    ErrorCode::PrefetchFileId,
    ErrorCode::RateLimit,
    ErrorCode::RetriesExceeded,
];

impl ErrorCode {
    /// The canonical wire string (e.g. `"error_rate_limit"`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::AnnotationsLoad => "error_annotations_load",
            Self::InvalidFileForCache => "error_invalid_file_for_cache",
            Self::PrefetchFileId => "error_prefetch_file_id",
            Self::RateLimit => "error_rate_limit",
            Self::RetriesExceeded => "error_retries_exceeded",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ErrorCode {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        serde_json::from_value(serde_json::Value::String(s.to_owned()))
            .map_err(|_| format!("unknown error code: {s}"))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
