//! HTTP handler definitions

use axum::{Json, extract::State, extract::rejection::JsonRejection};
use tracing::{debug, error, info};

use crate::errors::ApiError;
use crate::models::{AnalyzeRequest, AnalyzeResponse, HealthResponse};

use super::state::AppState;

/// POST /analyze endpoint
///
/// Computes word, character and sentence counts of a text.
///
/// # Request Body
/// ```json
/// { "text": "Text to analyze" }
/// ```
///
/// # Response
/// - 200 OK: analysis succeeded
/// - 400 Bad Request: empty text, or body is not valid JSON
/// - 422 Unprocessable Entity: `text` missing or not a string
/// - 500 Internal Server Error: unexpected failure (`{"detail": "Analysis failed"}`)
pub async fn post_analyze(
  State(state): State<AppState>,
  payload: Result<Json<AnalyzeRequest>, JsonRejection>,
) -> Result<Json<AnalyzeResponse>, ApiError> {
  let Json(request) = payload?;
  debug!(text_len = request.text.len(), "Received analysis request");

  // Run off the async workers; a panic in the service surfaces as a JoinError
  let service = state.service.clone();

  let response =
    tokio::task::spawn_blocking(move || service.analyze(request)).await.map_err(|e| {
      error!(error = %e, "spawn_blocking error");
      ApiError::internal(format!("analysis task failed: {e}"))
    })??;

  info!(
    word_count = response.word_count,
    sentence_count = response.sentence_count,
    "Analysis complete"
  );

  Ok(Json(response))
}

/// Health check endpoint
///
/// Confirms that the server is running.
pub async fn health_check() -> Json<HealthResponse> {
  Json(HealthResponse::healthy())
}
