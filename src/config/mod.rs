//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML), optional
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → AppConfig (validated, immutable)
//!     → --bind override from the command line (re-validated)
//!     → read once by the server when building its collaborators
//! ```
//!
//! # Design Decisions
//! - No hot reload; changes take effect on restart
//! - Every field has a default, so no file at all is a valid config
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, parse_config, ConfigError};
pub use schema::AppConfig;
pub use schema::ClientIpConfig;
pub use schema::ClientsConfig;
pub use schema::GeoConfig;
pub use schema::ListenerConfig;
pub use schema::LogFormat;
pub use schema::ObservabilityConfig;
