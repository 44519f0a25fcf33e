//! Text Analysis Service

use crate::errors::Result;
use crate::models::{AnalyzeRequest, AnalyzeResponse};

/// Common interface for the text analysis service
///
/// This trait allows swapping the production implementation (`TextAnalysisService`) with
/// test stubs/mocks.
pub trait InsightApiService: Send + Sync {
  /// Executes text analysis
  ///
  /// # Errors
  /// - Validation error (empty or whitespace-only text)
  /// - Internal error
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse>;
}

/// Text Analysis Service
///
/// Stateless; one instance is shared by every request.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextAnalysisService;

impl TextAnalysisService {
  /// Creates the service
  #[must_use]
  pub fn new() -> Self {
    Self
  }

  /// Executes text analysis
  ///
  /// # Errors
  /// - If the text is empty after trimming
  pub fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    let result = insight::analyze(&request.text)?;
    Ok(AnalyzeResponse::from(result))
  }
}

/// Production implementation of trait `InsightApiService`
impl InsightApiService for TextAnalysisService {
  fn analyze(&self, request: AnalyzeRequest) -> Result<AnalyzeResponse> {
    // Note: `self.analyze(...)` would recurse into the trait method
    TextAnalysisService::analyze(self, request)
  }
}
