//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the service.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the service.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Header sources used to resolve the client IP.
    pub client_ip: ClientIpConfig,

    /// Outbound geolocation lookup.
    pub geo: GeoConfig,

    /// Client classification (CLI vs browser).
    pub clients: ClientsConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,

    #[serde(default)]
    pub security: SecurityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8000").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8000".to_string(),
        }
    }
}

/// Header sources consulted when resolving the client IP, highest priority first.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientIpConfig {
    /// Single-value header written by a trusted CDN or proxy. Empty disables it.
    pub trusted_header: String,

    /// Comma-separated multi-hop forwarding header. Empty disables it.
    pub forwarded_header: String,

    /// Single-value headers checked in order after the forwarding header.
    pub secondary_headers: Vec<String>,
}

impl Default for ClientIpConfig {
    fn default() -> Self {
        Self {
            trusted_header: "cf-connecting-ip".to_string(),
            forwarded_header: "x-forwarded-for".to_string(),
            secondary_headers: vec!["x-real-ip".to_string(), "x-client-ip".to_string()],
        }
    }
}

/// Geolocation lookup configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct GeoConfig {
    /// Disable to skip the outbound call entirely.
    pub enabled: bool,

    /// Endpoint prefix; the resolved IP is appended to it.
    pub endpoint: String,

    /// Value of the `fields` query parameter.
    pub fields: String,

    /// Lookup timeout in seconds.
    pub timeout_secs: u64,

    /// Placeholder for geo fields when the lookup fails.
    pub unknown_value: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            endpoint: "http://ip-api.com/json/".to_string(),
            fields: "status,message,country,regionName,city,isp,proxy".to_string(),
            timeout_secs: 3,
            unknown_value: "Unknown".to_string(),
        }
    }
}

/// Client classification configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ClientsConfig {
    /// Case-sensitive user-agent substrings that mark a command-line client.
    pub cli_tokens: Vec<String>,
}

impl Default for ClientsConfig {
    fn default() -> Self {
        Self {
            cli_tokens: vec!["curl".to_string(), "Wget".to_string(), "wget".to_string()],
        }
    }
}

/// Timeout configuration for inbound requests.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 10 }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Log output format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

/// Security hardening configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SecurityConfig {
    /// Enable security response headers.
    pub enable_headers: bool,
}

impl Default for SecurityConfig {
    fn default() -> Self {
        Self {
            enable_headers: true,
        }
    }
}
