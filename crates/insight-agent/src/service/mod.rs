//! Service module

mod text_analysis_service;

pub use text_analysis_service::{InsightApiService, TextAnalysisService};
