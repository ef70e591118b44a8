//! Route handlers.

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{Html, IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::http::error::AppError;
use crate::http::extract::{user_agent, PeerAddr};
use crate::http::server::AppState;
use crate::response::{ClientKind, ResponseRecord};

#[derive(Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub version: &'static str,
}

/// `GET /`: bare IP for command-line clients, HTML page otherwise.
pub async fn index(
    State(state): State<AppState>,
    PeerAddr(peer): PeerAddr,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    let user_agent = user_agent(&headers);

    let kind = state.assembler.classify_client(user_agent);
    tracing::debug!(client = kind.as_str(), "Classified client");

    match kind {
        ClientKind::Cli => {
            let resolved = state.assembler.resolve_ip(&headers, peer)?;
            tracing::debug!(ip = %resolved, source = %resolved.source, "Serving plain-text IP");
            Ok(resolved.to_string().into_response())
        }
        ClientKind::Browser => {
            let record = state.assembler.build_response(&headers, peer, user_agent).await?;
            Ok(Html(state.renderer.render_index(&record)).into_response())
        }
    }
}

/// `GET /json`: the full record.
pub async fn json(
    State(state): State<AppState>,
    PeerAddr(peer): PeerAddr,
    headers: HeaderMap,
) -> Result<Json<ResponseRecord>, AppError> {
    let record = state
        .assembler
        .build_response(&headers, peer, user_agent(&headers))
        .await?;
    Ok(Json(record))
}

pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    })
}

pub async fn not_found(State(state): State<AppState>) -> impl IntoResponse {
    (StatusCode::NOT_FOUND, Html(state.renderer.render_not_found()))
}
