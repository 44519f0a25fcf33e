//! Data Model Definition
use serde::{Deserialize, Serialize};

/// Statistics computed for one piece of text
///
/// Produced by [`analyze`](crate::analyze). Only exists for the duration of one request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
  /// Input text with leading/trailing whitespace removed
  pub original_text: String,

  /// Number of whitespace-delimited tokens
  pub word_count: usize,

  /// Number of characters of the trimmed text
  pub character_count: usize,

  /// Number of `.`, `!`, `?` occurrences, never less than 1
  pub sentence_count: usize,
}
