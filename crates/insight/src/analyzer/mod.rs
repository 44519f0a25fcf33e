//! analyzer module
pub mod text_analyzer;

/// Re-exports
pub use text_analyzer::{
  SENTENCE_TERMINATORS, analyze, count_characters, count_sentence_terminators, count_words,
  is_text_whitespace, trim_text,
};
