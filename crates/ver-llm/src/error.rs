//! LLM client error types.

use thiserror::Error;
use ver_core::errors::CoreError;
use ver_schema::SchemaError;

/// Errors that can occur when calling the generative model.
#[derive(Debug, Error)]
pub enum LlmError {
    /// Caller input was rejected before any request was made.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// No API key is configured.
    #[error("API key is not configured")]
    NotConfigured,

    /// HTTP transport error.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API returned a non-success status code.
    #[error("API error ({status}): {message}")]
    Api {
        /// HTTP status code returned by the API.
        status: u16,
        /// Error message or response body.
        message: String,
    },

    /// The API returned a 429 Too Many Requests response.
    #[error("rate limited, retry after {retry_after_secs}s")]
    RateLimited {
        /// Seconds to wait before retrying.
        retry_after_secs: u64,
    },

    /// The prompt was blocked by the API's safety filters.
    #[error("prompt blocked: {0}")]
    Blocked(String),

    /// The response carried no candidate text.
    #[error("empty response: {0}")]
    EmptyResponse(String),

    /// Candidate text was not valid JSON or did not match the expected type.
    #[error("parse error: {0}")]
    Parse(String),

    /// Candidate JSON failed schema validation.
    #[error("schema validation failed: {0}")]
    Schema(#[from] SchemaError),

    /// Candidate JSON was well-formed but broke a structural rule.
    #[error("model output rejected: {0}")]
    Rejected(#[from] CoreError),
}
