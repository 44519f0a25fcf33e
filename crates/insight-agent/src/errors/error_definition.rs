//! API error definitions

use axum::{
  Json,
  extract::rejection::JsonRejection,
  http::StatusCode,
  response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{error, warn};

use insight::InsightError;

use crate::models::ErrorResponse;

/// Detail returned to clients for any unexpected failure
///
/// Never carries the underlying cause.
pub const INTERNAL_ERROR_DETAIL: &str = "Analysis failed";

/// Error kind
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiErrorKind {
  /// Input rejected by validation
  Validation,
  /// Request body did not match the expected schema
  MalformedRequest,
  /// Internal error
  Internal,
  /// Configuration error
  Config,
}

impl ApiErrorKind {
  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    match self {
      Self::Validation => "validation_error",
      Self::MalformedRequest => "malformed_request",
      Self::Internal => "internal_error",
      Self::Config => "config_error",
    }
  }

  /// Message of the log event written when an error of this kind is answered
  #[must_use]
  pub fn log_message(&self) -> &'static str {
    match self {
      Self::Validation => "Rejected invalid input",
      Self::MalformedRequest => "Rejected request body",
      Self::Internal => "Request failed",
      Self::Config => "Server misconfigured",
    }
  }

  /// Returns the HTTP status code
  ///
  /// `MalformedRequest` errors carry their own status; this is the typical one.
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::Validation => StatusCode::BAD_REQUEST,
      Self::MalformedRequest => StatusCode::UNPROCESSABLE_ENTITY,
      Self::Internal | Self::Config => StatusCode::INTERNAL_SERVER_ERROR,
    }
  }
}

/// API error
#[derive(Debug, Error)]
pub enum ApiError {
  /// Input rejected by validation (message is shown to the client as is)
  #[error("{0}")]
  Validation(String),

  /// Request body could not be deserialized
  #[error("Malformed request: {message}")]
  MalformedRequest {
    /// Status chosen by the body extractor (400, 415 or 422)
    status: StatusCode,
    /// Rejection reason
    message: String,
  },

  /// Internal error
  #[error("Internal error: {0}")]
  Internal(String),

  /// Configuration error
  #[error("Configuration error: {0}")]
  Config(String),
}

impl ApiError {
  /// Returns the error kind
  #[must_use]
  pub fn kind(&self) -> ApiErrorKind {
    match self {
      Self::Validation(_) => ApiErrorKind::Validation,
      Self::MalformedRequest { .. } => ApiErrorKind::MalformedRequest,
      Self::Internal(_) => ApiErrorKind::Internal,
      Self::Config(_) => ApiErrorKind::Config,
    }
  }

  /// Returns the error code
  #[must_use]
  pub fn code(&self) -> &'static str {
    self.kind().code()
  }

  /// Returns the HTTP status code
  #[must_use]
  pub fn status(&self) -> StatusCode {
    match self {
      Self::MalformedRequest { status, .. } => *status,
      _ => self.kind().status(),
    }
  }

  /// Message exposed in the response body
  ///
  /// Internal and configuration errors are reduced to [`INTERNAL_ERROR_DETAIL`].
  #[must_use]
  pub fn detail(&self) -> String {
    match self {
      Self::Validation(message) => message.clone(),
      Self::MalformedRequest { message, .. } => message.clone(),
      Self::Internal(_) | Self::Config(_) => INTERNAL_ERROR_DETAIL.to_string(),
    }
  }

  /// Creates a validation error
  #[must_use]
  pub fn validation(message: impl Into<String>) -> Self {
    Self::Validation(message.into())
  }

  /// Creates an internal error
  #[must_use]
  pub fn internal(message: impl Into<String>) -> Self {
    Self::Internal(message.into())
  }

  /// Creates a configuration error
  #[must_use]
  pub fn config(message: impl Into<String>) -> Self {
    Self::Config(message.into())
  }
}

impl IntoResponse for ApiError {
  fn into_response(self) -> Response {
    let status = self.status();

    let kind = self.kind();
    match kind {
      ApiErrorKind::Internal | ApiErrorKind::Config => {
        error!(error = %self, code = kind.code(), "{}", kind.log_message());
      }
      ApiErrorKind::MalformedRequest => {
        warn!(error = %self, status = status.as_u16(), "{}", kind.log_message());
      }
      ApiErrorKind::Validation => {}
    }

    let body = ErrorResponse {
      detail: self.detail(),
    };

    (status, Json(body)).into_response()
  }
}

/// Conversion from InsightError to ApiError
///
/// Maps core-layer errors to API-layer errors.
impl From<InsightError> for ApiError {
  fn from(err: InsightError) -> Self {
    match err {
      InsightError::EmptyInput => ApiError::validation(err.to_string()),
      // #[non_exhaustive] enum: variants added later are unexpected at this layer
      _ => ApiError::internal(format!("unknown error: {err}")),
    }
  }
}

/// Conversion from the `Json` extractor rejection
impl From<JsonRejection> for ApiError {
  fn from(rejection: JsonRejection) -> Self {
    ApiError::MalformedRequest {
      status: rejection.status(),
      message: rejection.body_text(),
    }
  }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn validation_creation() {
    let err = ApiError::validation("Text cannot be empty");
    assert_eq!(err.kind(), ApiErrorKind::Validation);
    assert_eq!(err.code(), "validation_error");
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(err.detail(), "Text cannot be empty");
  }

  #[test]
  fn internal_creation_hides_cause() {
    let err = ApiError::internal("task panicked: index out of bounds");
    assert_eq!(err.kind(), ApiErrorKind::Internal);
    assert_eq!(err.code(), "internal_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.detail(), "Analysis failed");
    assert!(err.to_string().contains("index out of bounds"));
  }

  #[test]
  fn config_creation() {
    let err = ApiError::config("Invalid PORT value");
    assert_eq!(err.kind(), ApiErrorKind::Config);
    assert_eq!(err.code(), "config_error");
    assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(err.detail(), "Analysis failed");
  }

  #[test]
  fn log_message_depends_on_kind() {
    assert_eq!(ApiErrorKind::Internal.log_message(), "Request failed");
    assert_eq!(ApiErrorKind::Config.log_message(), "Server misconfigured");
    assert_ne!(ApiErrorKind::Config.log_message(), INTERNAL_ERROR_DETAIL);
    assert_eq!(ApiErrorKind::MalformedRequest.log_message(), "Rejected request body");
  }

  #[test]
  fn malformed_request_keeps_extractor_status() {
    let err = ApiError::MalformedRequest {
      status: StatusCode::UNSUPPORTED_MEDIA_TYPE,
      message: "Expected request with `Content-Type: application/json`".to_string(),
    };
    assert_eq!(err.kind(), ApiErrorKind::MalformedRequest);
    assert_eq!(err.status(), StatusCode::UNSUPPORTED_MEDIA_TYPE);
    assert!(err.detail().contains("Content-Type"));
  }

  #[test]
  fn from_insight_error_empty_input() {
    let api_err: ApiError = InsightError::EmptyInput.into();
    assert_eq!(api_err.kind(), ApiErrorKind::Validation);
    assert_eq!(api_err.status(), StatusCode::BAD_REQUEST);
    assert_eq!(api_err.detail(), "Text cannot be empty");
  }

  #[tokio::test]
  async fn into_response_writes_detail_body() {
    let response = ApiError::internal("boom").into_response();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json: serde_json::Value = serde_json::from_slice(&body_bytes).unwrap();
    assert_eq!(json, serde_json::json!({ "detail": "Analysis failed" }));
  }
}
