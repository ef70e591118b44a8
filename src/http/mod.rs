//! HTTP protocol handling subsystem.
//!
//! # Data Flow
//! ```text
//! TCP connection (peer address via connect info)
//!     → server.rs (Axum setup, middleware)
//!     → extract.rs (peer address, user agent)
//!     → handlers.rs (/, /json, /health, fallback 404)
//!     → response assembly
//!     → error.rs (failures mapped to status codes)
//! ```

pub mod error;
pub mod extract;
pub mod handlers;
pub mod server;

pub use error::{AppError, ServerError};
pub use server::{AppState, HttpServer};
