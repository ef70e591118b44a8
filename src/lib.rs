//! IP echo service library.

pub mod client_ip;
pub mod config;
pub mod geo;
pub mod http;
pub mod lifecycle;
pub mod observability;
pub mod response;

pub use config::AppConfig;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
