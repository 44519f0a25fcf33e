//! Response Model Definition

use serde::{Deserialize, Serialize};

use insight::AnalysisResult;

use crate::config::SERVICE_NAME;

/// Text Analysis Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
  /// Input text after trimming
  pub original_text: String,
  /// Number of whitespace-delimited words
  pub word_count: usize,
  /// Number of characters in the trimmed text
  pub character_count: usize,
  /// Number of sentence terminators (at least 1)
  pub sentence_count: usize,
}

impl From<AnalysisResult> for AnalyzeResponse {
  fn from(result: AnalysisResult) -> Self {
    Self {
      original_text: result.original_text,
      word_count: result.word_count,
      character_count: result.character_count,
      sentence_count: result.sentence_count,
    }
  }
}

/// Health Check Response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
  /// Always "healthy" while the server is serving
  pub status: String,
  /// Service name
  pub service: String,
}

impl HealthResponse {
  /// Response reported by a running server
  #[must_use]
  pub fn healthy() -> Self {
    Self {
      status: "healthy".to_string(),
      service: SERVICE_NAME.to_string(),
    }
  }
}

/// Error Response body
///
/// Every error answer of the API has this shape: `{"detail": "..."}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
  /// Human-readable reason
  pub detail: String,
}
