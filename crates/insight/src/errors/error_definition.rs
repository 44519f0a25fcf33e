//! Error definitions

use thiserror::Error;

/// Unified error
/// Every public API of this crate returns this error
/// Use as `InsightResult<T>` = `Result<T, InsightError>`
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InsightError {
  /// The input is empty or consists only of whitespace
  #[error("Text cannot be empty")]
  EmptyInput,
}

/// Standard Result type alias of the insight crate
pub type InsightResult<T> = Result<T, InsightError>;
