//! Route handler functions for all API endpoints.
//!
//! Each handler extracts its payload via axum extractors, calls into the
//! analyzer, and returns JSON. All real decision logic lives below the
//! API layer; handlers only translate between wire shapes and core calls.

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use uplift_core::types::{AnalysisResult, Turn};
use uplift_session::MessageOutcome;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request/response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct AnalyzeRequest {
    pub text: String,
    pub user_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct StartSessionResponse {
    pub session_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub session_id: Uuid,
    pub text: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HistoryResponse {
    pub session_id: Uuid,
    pub turns: Vec<Turn>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

// =============================================================================
// Handler functions
// =============================================================================

/// POST /analyze - single-shot analysis of one message.
pub async fn analyze(
    State(state): State<AppState>,
    Json(req): Json<AnalyzeRequest>,
) -> Result<Json<AnalysisResult>, ApiError> {
    let result = state.analyzer.analyze(&req.text, req.user_id.as_deref())?;
    tracing::debug!(status = %result.overall_status, "Message analyzed");
    Ok(Json(result))
}

/// POST /session/start - open a new conversation session.
pub async fn start_session(
    State(state): State<AppState>,
) -> Result<Json<StartSessionResponse>, ApiError> {
    let session_id = state.analyzer.start_session();
    tracing::info!(session_id = %session_id, "Session started");
    Ok(Json(StartSessionResponse { session_id }))
}

/// POST /session/message - analyze a message within a session and append
/// the exchange to its history.
pub async fn send_message(
    State(state): State<AppState>,
    Json(req): Json<SendMessageRequest>,
) -> Result<Json<MessageOutcome>, ApiError> {
    let outcome = state.analyzer.send_message(req.session_id, &req.text)?;
    tracing::debug!(
        session_id = %req.session_id,
        status = %outcome.overall_status,
        "Session message handled"
    );
    Ok(Json(outcome))
}

/// GET /session/{id}/history - ordered turn history of a session.
pub async fn session_history(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<HistoryResponse>, ApiError> {
    let turns = state.analyzer.history(id)?;
    Ok(Json(HistoryResponse {
        session_id: id,
        turns,
    }))
}

/// GET /health - liveness probe.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}
