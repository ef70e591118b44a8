//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! main.rs
//!     → logging.rs (global subscriber, pretty or JSON to stdout)
//!     → metrics.rs (Prometheus recorder, only when enabled)
//!
//! Per request:
//!     TraceLayer span (method, uri, x-request-id)
//!     → track_metrics (request count and latency by route)
//!     → geo lookups tagged by outcome
//! ```

pub mod logging;
pub mod metrics;
