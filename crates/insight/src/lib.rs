//! insight text statistics library
//!
//! Counts words, characters and sentence terminators in a piece of text.

/// Analyzer module - the `analyze` function and its counting helpers
pub mod analyzer;

/// Error module - InsightError, InsightResult
pub mod errors;

/// Data model module - AnalysisResult
pub mod models;

/// Re-exports
pub use analyzer::analyze;
pub use errors::{InsightError, InsightResult};
pub use models::AnalysisResult;
