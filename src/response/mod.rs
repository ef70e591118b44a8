//! Response assembly subsystem.
//!
//! # Data Flow
//! ```text
//! headers + peer + user agent
//!     → assemble.rs (resolve IP, geolocation lookup, classify client)
//!     → record.rs (ResponseRecord with placeholders for missing geo data)
//!     → render.rs (HTML for browsers) or bare IP / JSON
//! ```

pub mod assemble;
pub mod record;
pub mod render;

pub use assemble::ResponseAssembler;
pub use record::{classify_client, ClientKind, ResponseRecord};
pub use render::{PageRenderer, TemplateRenderer};
