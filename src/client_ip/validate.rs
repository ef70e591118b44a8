//! Address validation policy.
//!
//! A header token is usable as a client IP only if it parses and is not an
//! internal network hop (private-use, loopback, link-local) or the unspecified
//! address. IPv4-mapped IPv6
//! addresses are reduced to their embedded IPv4 address before the policy is
//! applied, so `::ffff:10.0.0.1` is rejected like `10.0.0.1`.

use std::fmt;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Address family of a validated IP.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddressFamily {
    V4,
    V6,
    /// IPv4-mapped IPv6 input, normalized to IPv4.
    MappedV4,
}

/// An IP that passed parsing and policy filtering.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidatedIp {
    addr: IpAddr,
    family: AddressFamily,
}

impl ValidatedIp {
    pub fn addr(&self) -> IpAddr {
        self.addr
    }

    pub fn family(&self) -> AddressFamily {
        self.family
    }
}

impl fmt::Display for ValidatedIp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.addr.fmt(f)
    }
}

/// Parse and filter a single token. Never fails loudly: anything unusable is `None`.
pub fn validate(token: &str) -> Option<ValidatedIp> {
    let token = token.trim();
    if token.is_empty() {
        return None;
    }
    let parsed: IpAddr = token.parse().ok()?;
    let candidate = normalize(parsed);
    if is_internal(&candidate.addr) {
        return None;
    }
    Some(candidate)
}

/// Reduce IPv4-mapped IPv6 to IPv4 and tag the family.
pub fn normalize(addr: IpAddr) -> ValidatedIp {
    match addr {
        IpAddr::V4(_) => ValidatedIp {
            addr,
            family: AddressFamily::V4,
        },
        IpAddr::V6(v6) => match v6.to_ipv4_mapped() {
            Some(v4) => ValidatedIp {
                addr: IpAddr::V4(v4),
                family: AddressFamily::MappedV4,
            },
            None => ValidatedIp {
                addr,
                family: AddressFamily::V6,
            },
        },
    }
}

/// True for private-use, loopback, link-local and unspecified addresses.
pub fn is_internal(addr: &IpAddr) -> bool {
    match addr {
        IpAddr::V4(v4) => is_internal_v4(v4),
        IpAddr::V6(v6) => is_internal_v6(v6),
    }
}

fn is_internal_v4(v4: &Ipv4Addr) -> bool {
    v4.is_private() || v4.is_loopback() || v4.is_link_local() || v4.is_unspecified()
}

fn is_internal_v6(v6: &Ipv6Addr) -> bool {
    let first = v6.segments()[0];
    // fc00::/7 unique local
    let unique_local = (first & 0xfe00) == 0xfc00;
    // fe80::/10
    let link_local = (first & 0xffc0) == 0xfe80;
    v6.is_loopback() || v6.is_unspecified() || unique_local || link_local
}
