//! Geolocation lookup subsystem.
//!
//! # Data Flow
//! ```text
//! ResolvedIp
//!     → client.rs (GET {endpoint}{ip}?fields=..., bounded by timeout)
//!     → types.rs (decode body, check upstream status)
//!     → Result<GeoRecord, GeoError>
//! ```
//!
//! # Design Decisions
//! - Best-effort enrichment: callers downgrade any error to placeholder fields
//! - Every call has a deadline and is never retried within a request
//! - `GeoLookup` trait lets the HTTP layer run against a fake upstream

pub mod client;
pub mod types;

pub use client::{DisabledLookup, GeoLookup, IpApiClient};
pub use types::{GeoError, GeoRecord, GeoResult};
