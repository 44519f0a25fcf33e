//! insight-agent crate
//!
//! Web server providing text statistics as an HTTP API.
//!
//! ## Endpoints
//! - `POST /analyze` - Text analysis
//! - `GET /health` - Health Check
//!
//! ## Usage Example
//! ```bash
//! curl -X POST http://127.0.0.1:8080/analyze \
//!   -H "Content-Type: application/json" \
//!   -d '{"text": "The sky is blue. It is nice!"}'
//! ```

pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod service;

pub use api::AppState;
pub use config::Config;
pub use errors::{ApiError, ApiErrorKind};
pub use models::{AnalyzeRequest, AnalyzeResponse, ErrorResponse, HealthResponse};
pub use service::{InsightApiService, TextAnalysisService};
