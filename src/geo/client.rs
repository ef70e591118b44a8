//! Geolocation HTTP client with timeout and error handling.
//!
//! # Responsibilities
//! - Query the ip-api.com style endpoint for one address
//! - Bound every call by the configured timeout
//! - Classify failures into `GeoError` so callers can degrade

use std::net::IpAddr;
use std::time::Duration;

use async_trait::async_trait;
use tokio::time::timeout;

use crate::config::GeoConfig;
use crate::geo::types::{GeoError, GeoRecord, GeoResult, IpApiResponse};
use crate::observability::metrics;

/// Looks up location data for an IP address.
#[async_trait]
pub trait GeoLookup: Send + Sync {
    async fn lookup(&self, ip: IpAddr) -> GeoResult<GeoRecord>;
}

/// Client for ip-api.com compatible endpoints.
#[derive(Clone)]
pub struct IpApiClient {
    http: reqwest::Client,
    endpoint: String,
    fields: String,
    timeout_secs: u64,
}

impl IpApiClient {
    /// Create a new client from configuration.
    pub fn new(config: &GeoConfig) -> GeoResult<Self> {
        let http = reqwest::Client::builder()
            .connect_timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| GeoError::Request(e.to_string()))?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            fields: config.fields.clone(),
            timeout_secs: config.timeout_secs,
        })
    }

    fn url_for(&self, ip: IpAddr) -> String {
        format!("{}{}", self.endpoint, ip)
    }

    async fn fetch(&self, ip: IpAddr) -> GeoResult<GeoRecord> {
        let url = self.url_for(ip);
        tracing::debug!(url = %url, "Fetching geolocation");

        let response = self
            .http
            .get(&url)
            .query(&[("fields", self.fields.as_str())])
            .send()
            .await
            .map_err(|e| GeoError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(GeoError::Status(status.as_u16()));
        }

        let body: IpApiResponse = response
            .json()
            .await
            .map_err(|e| GeoError::Decode(e.to_string()))?;

        body.into_record()
    }
}

#[async_trait]
impl GeoLookup for IpApiClient {
    async fn lookup(&self, ip: IpAddr) -> GeoResult<GeoRecord> {
        let result = match timeout(Duration::from_secs(self.timeout_secs), self.fetch(ip)).await {
            Ok(result) => result,
            Err(_) => Err(GeoError::Timeout(self.timeout_secs)),
        };
        metrics::record_geo_lookup(result.as_ref().err().map(GeoError::kind));
        result
    }
}

/// Stand-in used when lookups are disabled; always reports `GeoError::Disabled`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DisabledLookup;

#[async_trait]
impl GeoLookup for DisabledLookup {
    async fn lookup(&self, _ip: IpAddr) -> GeoResult<GeoRecord> {
        Err(GeoError::Disabled)
    }
}
