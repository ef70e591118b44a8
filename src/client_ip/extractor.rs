//! Header extraction strategies.
//!
//! Each strategy knows how to pull candidate tokens out of one header. The
//! resolver walks an ordered list of them, so the precedence of header sources
//! is data, not control flow.

use axum::http::{HeaderMap, HeaderName};

use crate::client_ip::validate::{validate, ValidatedIp};

/// A raw, trimmed, non-empty token taken from a header value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CandidateIp<'a>(&'a str);

impl<'a> CandidateIp<'a> {
    /// Returns `None` for blank tokens.
    pub fn new(raw: &'a str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed))
        }
    }

    pub fn as_str(&self) -> &'a str {
        self.0
    }
}

/// A source of client IP candidates.
pub trait IpExtractor: Send + Sync {
    /// Header this extractor reads, for logging.
    fn header(&self) -> &HeaderName;

    /// Candidates in priority order.
    fn candidates<'h>(&self, headers: &'h HeaderMap) -> Vec<CandidateIp<'h>>;

    /// First candidate that passes validation.
    fn try_extract(&self, headers: &HeaderMap) -> Option<ValidatedIp> {
        self.candidates(headers).into_iter().find_map(|candidate| {
            let validated = validate(candidate.as_str());
            if validated.is_none() {
                tracing::debug!(
                    header = %self.header(),
                    candidate = candidate.as_str(),
                    "Skipping unusable client IP candidate"
                );
            }
            validated
        })
    }
}

/// A header carrying exactly one address, e.g. `cf-connecting-ip` or `x-real-ip`.
#[derive(Debug, Clone)]
pub struct SingleHeader {
    name: HeaderName,
}

impl SingleHeader {
    pub fn new(name: HeaderName) -> Self {
        Self { name }
    }
}

impl IpExtractor for SingleHeader {
    fn header(&self) -> &HeaderName {
        &self.name
    }

    fn candidates<'h>(&self, headers: &'h HeaderMap) -> Vec<CandidateIp<'h>> {
        headers
            .get(&self.name)
            .and_then(|v| v.to_str().ok())
            .and_then(CandidateIp::new)
            .into_iter()
            .collect()
    }
}

/// A comma-separated hop chain such as `x-forwarded-for`, client first.
///
/// Repeated header lines are read in the order received, as if joined by commas.
#[derive(Debug, Clone)]
pub struct ForwardedChain {
    name: HeaderName,
}

impl ForwardedChain {
    pub fn new(name: HeaderName) -> Self {
        Self { name }
    }
}

impl IpExtractor for ForwardedChain {
    fn header(&self) -> &HeaderName {
        &self.name
    }

    fn candidates<'h>(&self, headers: &'h HeaderMap) -> Vec<CandidateIp<'h>> {
        headers
            .get_all(&self.name)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(','))
            .filter_map(CandidateIp::new)
            .collect()
    }
}
