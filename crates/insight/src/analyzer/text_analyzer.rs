//! Text statistics
//!
//! Pure counting over a string. No sentence segmentation is performed:
//! the sentence count is a tally of terminator characters.

use tracing::info;

use crate::errors::{InsightError, InsightResult};
use crate::models::AnalysisResult;

/// Characters counted as sentence terminators
pub const SENTENCE_TERMINATORS: [char; 3] = ['.', '!', '?'];

/// Whitespace used for trimming and word splitting
///
/// Unicode `White_Space` plus the information separators U+001C..=U+001F.
#[must_use]
pub fn is_text_whitespace(c: char) -> bool {
  c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

/// Removes leading/trailing whitespace (see [`is_text_whitespace`])
#[must_use]
pub fn trim_text(text: &str) -> &str {
  text.trim_matches(is_text_whitespace)
}

/// Analyzes a text and returns its statistics
///
/// # Processing
/// 1. Trim leading/trailing whitespace
/// 2. Reject the text if nothing is left
/// 3. Count words, characters and sentence terminators of the trimmed text
/// 4. Clamp the sentence count to at least 1
///
/// # Errors
/// - `InsightError::EmptyInput` if the text is empty or whitespace-only
///
/// # Examples
/// ```
/// let result = insight::analyze("Wait... really?!").unwrap();
/// assert_eq!(result.word_count, 2);
/// assert_eq!(result.sentence_count, 5);
/// ```
pub fn analyze(text: &str) -> InsightResult<AnalysisResult> {
  let trimmed = trim_text(text);
  if trimmed.is_empty() {
    return Err(InsightError::EmptyInput);
  }

  let word_count = count_words(trimmed);
  let character_count = count_characters(trimmed);
  // Any non-empty text is at least one sentence
  let sentence_count = count_sentence_terminators(trimmed).max(1);

  info!(word_count, "Analyzed text with {} words", word_count);

  Ok(AnalysisResult {
    original_text: trimmed.to_string(),
    word_count,
    character_count,
    sentence_count,
  })
}

/// Number of maximal runs of non-whitespace characters
#[must_use]
pub fn count_words(text: &str) -> usize {
  text.split(is_text_whitespace).filter(|word| !word.is_empty()).count()
}

/// Number of characters (not bytes)
#[must_use]
pub fn count_characters(text: &str) -> usize {
  text.chars().count()
}

/// Number of `.`, `!` and `?` occurrences; `"..."` counts as 3
#[must_use]
pub fn count_sentence_terminators(text: &str) -> usize {
  text.chars().filter(|c| SENTENCE_TERMINATORS.contains(c)).count()
}
