//! Error types for the HTTP layer.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::client_ip::ClientIpError;
use crate::geo::GeoError;

/// Errors surfaced to HTTP clients.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Client IP resolution failed: {0}")]
    ClientIp(#[from] ClientIpError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, error_message) = match &self {
            AppError::ClientIp(e) => {
                tracing::error!(error = %e, "Client IP resolution failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error")
            }
        };

        let body = Json(json!({
            "error": error_message,
            "code": status.as_u16(),
        }));

        (status, body).into_response()
    }
}

/// Errors raised while constructing the server.
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Client IP configuration error: {0}")]
    ClientIp(#[from] ClientIpError),

    #[error("Geolocation client error: {0}")]
    Geo(#[from] GeoError),
}
