//! Client IP resolution subsystem.
//!
//! # Data Flow
//! ```text
//! HeaderMap + peer address
//!     → extractor.rs (ordered strategies: trusted header, forwarding chain, secondary headers)
//!     → validate.rs (parse, normalize IPv4-mapped IPv6, drop private/loopback/link-local)
//!     → resolver.rs (first validated candidate, else peer address)
//!     → ResolvedIp
//! ```
//!
//! # Design Decisions
//! - Header values are untrusted: bad tokens are skipped, never surfaced
//! - Header precedence is a list built from config
//! - The peer fallback is exempt from the private-address filter
//! - Best effort only; the result is not a security boundary

pub mod extractor;
pub mod resolver;
pub mod validate;

pub use extractor::{CandidateIp, ForwardedChain, IpExtractor, SingleHeader};
pub use resolver::{ClientIpError, ClientIpResolver, IpSource, ResolvedIp};
pub use validate::{validate, AddressFamily, ValidatedIp};
