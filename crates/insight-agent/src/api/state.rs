//! Shared handler state

use std::sync::Arc;

use crate::config::Config;
use crate::service::InsightApiService;

/// Handed to every handler through `State<AppState>`
///
/// Cloned per request, so it only holds the immutable config and a shared
/// handle to the analysis service.
#[derive(Clone)]
pub struct AppState {
  /// Server settings the process was started with
  pub config: Config,
  /// Analysis backend; `TextAnalysisService` in the binary, stubs in tests
  pub service: Arc<dyn InsightApiService>,
}

impl AppState {
  /// Bundles config and service for the router
  #[must_use]
  pub fn new(config: Config, service: Arc<dyn InsightApiService>) -> Self {
    Self { config, service }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::models::AnalyzeRequest;
  use crate::service::TextAnalysisService;

  #[test]
  fn cloned_state_shares_the_service() {
    let state = AppState::new(Config::default(), Arc::new(TextAnalysisService::new()));
    let cloned = state.clone();

    assert!(Arc::ptr_eq(&state.service, &cloned.service));
    assert_eq!(cloned.config.port, 8080);

    let response = cloned
      .service
      .analyze(AnalyzeRequest {
        text: "one two".to_string(),
      })
      .unwrap();
    assert_eq!(response.word_count, 2);
  }
}
