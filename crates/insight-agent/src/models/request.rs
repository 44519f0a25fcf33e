//! Request model definition

use serde::Deserialize;

/// Text analysis request
#[derive(Debug, Clone, Deserialize)]
pub struct AnalyzeRequest {
  /// Text to analyze (may be empty; validated by the analyzer)
  pub text: String,
}
