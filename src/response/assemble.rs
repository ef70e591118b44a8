//! Response assembly.
//!
//! # Responsibilities
//! - Resolve the client IP for a request
//! - Enrich it with a geolocation lookup, downgrading failures to placeholders
//! - Classify the client from its user agent

use std::net::IpAddr;
use std::sync::Arc;

use axum::http::HeaderMap;

use crate::client_ip::{ClientIpError, ClientIpResolver, ResolvedIp};
use crate::config::AppConfig;
use crate::geo::{GeoError, GeoLookup};
use crate::response::record::{classify_client, ClientKind, ResponseRecord};

/// Builds `ResponseRecord`s. Holds only immutable, shared collaborators.
pub struct ResponseAssembler {
    resolver: ClientIpResolver,
    geo: Arc<dyn GeoLookup>,
    cli_tokens: Vec<String>,
    unknown: String,
}

impl ResponseAssembler {
    pub fn new(
        resolver: ClientIpResolver,
        geo: Arc<dyn GeoLookup>,
        cli_tokens: Vec<String>,
        unknown: String,
    ) -> Self {
        Self {
            resolver,
            geo,
            cli_tokens,
            unknown,
        }
    }

    pub fn from_config(config: &AppConfig, geo: Arc<dyn GeoLookup>) -> Result<Self, ClientIpError> {
        Ok(Self::new(
            ClientIpResolver::from_config(&config.client_ip)?,
            geo,
            config.clients.cli_tokens.clone(),
            config.geo.unknown_value.clone(),
        ))
    }

    pub fn resolve_ip(
        &self,
        headers: &HeaderMap,
        peer: Option<IpAddr>,
    ) -> Result<ResolvedIp, ClientIpError> {
        self.resolver.resolve(headers, peer)
    }

    pub fn classify_client(&self, user_agent: Option<&str>) -> ClientKind {
        classify_client(user_agent, self.cli_tokens.as_slice())
    }

    /// Resolve, look up and combine. Geolocation failures never fail the call.
    pub async fn build_response(
        &self,
        headers: &HeaderMap,
        peer: Option<IpAddr>,
        user_agent: Option<&str>,
    ) -> Result<ResponseRecord, ClientIpError> {
        let resolved = self.resolve_ip(headers, peer)?;
        tracing::debug!(ip = %resolved, source = %resolved.source, "Resolved client IP");

        let geo = match self.geo.lookup(resolved.addr).await {
            Ok(record) => Some(record),
            Err(GeoError::Disabled) => None,
            Err(e) => {
                tracing::warn!(ip = %resolved, error = %e, "Geolocation lookup failed");
                None
            }
        };

        Ok(ResponseRecord::new(
            resolved.to_string(),
            geo,
            user_agent.map(str::to_owned),
            &self.unknown,
        ))
    }
}
