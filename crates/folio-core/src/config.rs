//! Construction-time configuration and passthrough value shapes.
//!
//! Loading and parsing live with the host; these are plain values
//! accepted at construction and forwarded verbatim.

use serde::{Deserialize, Serialize};

use crate::levels::ConsoleLevel;

/// Telemetry configuration accepted at construction.
///
/// Only `console_level` is consumed by the façade itself; the remaining
/// fields parameterize the collector.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LogConfig {
    /// Console output threshold.
    pub console_level: ConsoleLevel,
    /// Whether the collector buffers records for saving.
    pub saving_enabled: bool,
    /// Base URL of the log service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
    /// Host application identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_host: Option<String>,
    /// Endpoint path appended to `log_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_endpoint: Option<String>,
    /// BCP 47 locale of the viewer session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            console_level: ConsoleLevel::Silent,
            saving_enabled: false,
            log_url: None,
            app_host: None,
            log_endpoint: None,
            locale: None,
        }
    }
}

impl LogConfig {
    /// The endpoint options forwarded to the collector's network setup.
    #[must_use]
    pub fn network_options(&self) -> NetworkOptions {
        NetworkOptions {
            log_url: self.log_url.clone(),
            log_endpoint: self.log_endpoint.clone(),
            app_host: self.app_host.clone(),
            locale: self.locale.clone(),
        }
    }
}

/// Endpoint options passed through `setup_network_layer`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkOptions {
    /// Base URL of the log service.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_url: Option<String>,
    /// Endpoint path appended to `log_url`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_endpoint: Option<String>,
    /// Host application identifier.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub app_host: Option<String>,
    /// BCP 47 locale of the viewer session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
}

/// File identity passed through `set_file`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileInfo {
    /// File identifier.
    pub id: String,
    /// File version identifier, when versioned.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    /// Lowercase file extension.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extension: Option<String>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
