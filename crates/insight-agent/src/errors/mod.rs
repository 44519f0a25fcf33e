//! Errors module

mod error_definition;

pub use error_definition::{ApiError, ApiErrorKind, INTERNAL_ERROR_DETAIL, Result};
