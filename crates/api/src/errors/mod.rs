//! API error handling and response conversion.
//!
//! - [`ApiError`]: The error type returned by handlers
//! - [`conversion`]: Conversions from workflow, domain and extractor errors

pub mod api_error;
pub mod conversion;

pub use api_error::ApiError;
