//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, header names and the geolocation endpoint
//! - Validate value ranges (timeouts > 0)
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: AppConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::AppConfig;

/// A single semantic problem found in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{field}: {message}")]
pub struct ValidationError {
    /// Dotted path of the offending field.
    pub field: String,
    pub message: String,
}

impl ValidationError {
    fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Validate a parsed configuration, collecting every error.
pub fn validate_config(config: &AppConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::new(
            "listener.bind_address",
            format!("'{}' is not a socket address", config.listener.bind_address),
        ));
    }

    check_header_name(
        &config.client_ip.trusted_header,
        "client_ip.trusted_header",
        &mut errors,
    );
    check_header_name(
        &config.client_ip.forwarded_header,
        "client_ip.forwarded_header",
        &mut errors,
    );
    for (i, name) in config.client_ip.secondary_headers.iter().enumerate() {
        let field = format!("client_ip.secondary_headers[{}]", i);
        if name.trim().is_empty() {
            errors.push(ValidationError::new(field, "header name must not be empty"));
        } else {
            check_header_name(name, &field, &mut errors);
        }
    }

    if config.geo.enabled {
        match url::Url::parse(&config.geo.endpoint) {
            Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
            Ok(url) => errors.push(ValidationError::new(
                "geo.endpoint",
                format!("unsupported scheme '{}'", url.scheme()),
            )),
            Err(e) => errors.push(ValidationError::new(
                "geo.endpoint",
                format!("invalid URL '{}': {}", config.geo.endpoint, e),
            )),
        }
        if config.geo.timeout_secs == 0 {
            errors.push(ValidationError::new("geo.timeout_secs", "must be greater than 0"));
        }
    }

    if config.clients.cli_tokens.iter().any(|t| t.is_empty()) {
        errors.push(ValidationError::new(
            "clients.cli_tokens",
            "empty token would match every user agent",
        ));
    }

    if config.timeouts.request_secs == 0 {
        errors.push(ValidationError::new("timeouts.request_secs", "must be greater than 0"));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!("'{}' is not a socket address", config.observability.metrics_address),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Empty names are allowed and disable the source.
fn check_header_name(name: &str, field: &str, errors: &mut Vec<ValidationError>) {
    if name.is_empty() {
        return;
    }
    if HeaderName::try_from(name).is_err() {
        errors.push(ValidationError::new(
            field,
            format!("'{}' is not a valid header name", name),
        ));
    }
}
