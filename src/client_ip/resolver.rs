//! Client IP resolution.
//!
//! Walks the configured extractors in order and stops at the first one that
//! yields a validated address. When no header produces one, the transport peer
//! address is used; it is validated for tagging purposes only and returned even
//! when it is private, since a process behind a reverse proxy on a private
//! network usually sees a private peer.

use std::fmt;
use std::net::IpAddr;

use axum::http::{HeaderMap, HeaderName};
use thiserror::Error;

use crate::client_ip::extractor::{ForwardedChain, IpExtractor, SingleHeader};
use crate::client_ip::validate::{is_internal, normalize, AddressFamily};
use crate::config::ClientIpConfig;

/// Errors raised while building or running the resolver.
#[derive(Debug, Error)]
pub enum ClientIpError {
    /// A configured header name is not a valid HTTP header name.
    #[error("invalid header name '{0}'")]
    InvalidHeaderName(String),

    /// The host did not provide a peer address for the connection.
    #[error("peer address unavailable; serve with connect info enabled")]
    MissingPeerAddress,
}

/// Where the resolved address came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IpSource {
    Header(HeaderName),
    /// Peer address that passed validation.
    Peer,
    /// Peer address used as-is after failing validation.
    PeerUnvalidated,
}

impl fmt::Display for IpSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IpSource::Header(name) => write!(f, "header:{}", name),
            IpSource::Peer => f.write_str("peer"),
            IpSource::PeerUnvalidated => f.write_str("peer-unvalidated"),
        }
    }
}

/// The single address chosen for a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIp {
    pub addr: IpAddr,
    pub family: AddressFamily,
    pub source: IpSource,
}

impl fmt::Display for ResolvedIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.addr.fmt(f)
    }
}

/// Ordered list of extraction strategies with a peer-address fallback.
pub struct ClientIpResolver {
    extractors: Vec<Box<dyn IpExtractor>>,
}

impl ClientIpResolver {
    pub fn new(extractors: Vec<Box<dyn IpExtractor>>) -> Self {
        Self { extractors }
    }

    /// Build the precedence list: trusted header, forwarding chain, secondary headers.
    pub fn from_config(config: &ClientIpConfig) -> Result<Self, ClientIpError> {
        let mut extractors: Vec<Box<dyn IpExtractor>> = Vec::new();

        if !config.trusted_header.is_empty() {
            extractors.push(Box::new(SingleHeader::new(header_name(&config.trusted_header)?)));
        }
        if !config.forwarded_header.is_empty() {
            extractors.push(Box::new(ForwardedChain::new(header_name(&config.forwarded_header)?)));
        }
        for name in &config.secondary_headers {
            extractors.push(Box::new(SingleHeader::new(header_name(name)?)));
        }

        Ok(Self::new(extractors))
    }

    /// Resolve the client IP. Only fails when the peer address is missing.
    pub fn resolve(
        &self,
        headers: &HeaderMap,
        peer: Option<IpAddr>,
    ) -> Result<ResolvedIp, ClientIpError> {
        for extractor in &self.extractors {
            if let Some(ip) = extractor.try_extract(headers) {
                return Ok(ResolvedIp {
                    addr: ip.addr(),
                    family: ip.family(),
                    source: IpSource::Header(extractor.header().clone()),
                });
            }
        }

        let peer = peer.ok_or(ClientIpError::MissingPeerAddress)?;
        let ip = normalize(peer);
        let source = if is_internal(&ip.addr()) {
            tracing::trace!(peer = %peer, "Using unvalidated peer address");
            IpSource::PeerUnvalidated
        } else {
            IpSource::Peer
        };
        Ok(ResolvedIp {
            addr: ip.addr(),
            family: ip.family(),
            source,
        })
    }
}

fn header_name(name: &str) -> Result<HeaderName, ClientIpError> {
    HeaderName::try_from(name).map_err(|_| ClientIpError::InvalidHeaderName(name.to_string()))
}
