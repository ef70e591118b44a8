//! Geolocation record and error definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Location data for an IP address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeoRecord {
    pub country: String,
    pub region: String,
    pub city: String,
    pub isp: String,
    pub proxy: bool,
}

/// Errors that can occur during a geolocation lookup.
#[derive(Debug, Error)]
pub enum GeoError {
    /// Connection or transport failure.
    #[error("Lookup request failed: {0}")]
    Request(String),

    /// Lookup did not finish in time.
    #[error("Lookup timeout after {0} seconds")]
    Timeout(u64),

    /// Upstream answered with a non-success HTTP status.
    #[error("Lookup returned HTTP {0}")]
    Status(u16),

    /// Upstream reported a failure in its body.
    #[error("Lookup failed upstream: {0}")]
    Upstream(String),

    /// Body was not the expected JSON.
    #[error("Failed to decode lookup response: {0}")]
    Decode(String),

    /// Lookups are turned off in configuration.
    #[error("Geolocation lookups disabled")]
    Disabled,
}

impl GeoError {
    /// Short label for metrics.
    pub fn kind(&self) -> &'static str {
        match self {
            GeoError::Request(_) => "request",
            GeoError::Timeout(_) => "timeout",
            GeoError::Status(_) => "status",
            GeoError::Upstream(_) => "upstream",
            GeoError::Decode(_) => "decode",
            GeoError::Disabled => "disabled",
        }
    }
}

/// Result type for geolocation lookups.
pub type GeoResult<T> = Result<T, GeoError>;

/// Wire format of the ip-api.com JSON endpoint.
///
/// Only `status` is always present; the rest depend on the requested fields.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IpApiResponse {
    pub status: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub region_name: Option<String>,
    #[serde(default)]
    pub city: Option<String>,
    #[serde(default)]
    pub isp: Option<String>,
    #[serde(default)]
    pub proxy: Option<bool>,
}

impl IpApiResponse {
    pub(crate) fn into_record(self) -> GeoResult<GeoRecord> {
        if self.status != "success" {
            return Err(GeoError::Upstream(
                self.message.unwrap_or_else(|| self.status.clone()),
            ));
        }
        Ok(GeoRecord {
            country: self.country.unwrap_or_default(),
            region: self.region_name.unwrap_or_default(),
            city: self.city.unwrap_or_default(),
            isp: self.isp.unwrap_or_default(),
            proxy: self.proxy.unwrap_or(false),
        })
    }
}
