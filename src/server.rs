//! HTTP interface to the engine.
//!
//! - `POST /api/get-ai-move` takes a [`MoveRequest`] and returns a [`MoveResponse`]
//! - `GET /api/health` reports liveness

use crate::protocol::{MoveRequest, MoveResponse, ProtocolError, ProtocolErrorKind, respond};
use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Body of the health endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"healthy"` while the process serves requests.
    pub status: String,
    /// Whether the engine can answer move requests.
    pub engine_ready: bool,
}

/// Body returned for rejected requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human-readable reason.
    pub error: String,
}

/// Builds the service router.
pub fn router() -> Router {
    Router::new()
        .route("/api/get-ai-move", post(get_ai_move))
        .route("/api/health", get(health))
}

/// Binds `host:port` and serves until the process stops.
#[instrument]
pub async fn serve(host: &str, port: u16) -> anyhow::Result<()> {
    let listener = tokio::net::TcpListener::bind((host, port)).await?;
    info!("Server ready at http://{}:{}/", host, port);
    axum::serve(listener, router()).await?;
    Ok(())
}

/// Body rejections from the JSON extractor are reported through
/// [`ProtocolError`] like every other invalid request.
#[instrument(skip_all)]
async fn get_ai_move(
    payload: Result<Json<MoveRequest>, JsonRejection>,
) -> Result<Json<MoveResponse>, ProtocolError> {
    let Json(request) = payload
        .map_err(|rejection| ProtocolError::new(ProtocolErrorKind::Json(rejection.body_text())))?;
    respond(&request).map(Json)
}

#[instrument]
async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        engine_ready: true,
    })
}

impl IntoResponse for ProtocolError {
    fn into_response(self) -> Response {
        warn!(error = %self, "Rejected move request");
        let body = ErrorResponse {
            error: self.kind.to_string(),
        };
        (StatusCode::BAD_REQUEST, Json(body)).into_response()
    }
}
