//! # ver-llm
//!
//! Gemini `generateContent` client for Veridian.
//!
//! Two operations share one transport:
//! - [`GeminiClient::analyze`]: multi-agent compliance review. Remote failures
//!   fold into an `ANALYSIS_FAILED` result, only bad input is an error.
//! - [`GeminiClient::run_scenario`]: predictive scenario report, absent on any
//!   failure. [`GeminiClient::try_run_scenario`] exposes the reason.
//!
//! Model output is untrusted. Candidate JSON is validated against the
//! `ver-schema` registry before any typed record is built.

pub mod analysis;
pub mod prompt;
pub mod scenario;

mod client;
mod error;

pub use analysis::{API_ERROR_SUMMARY, MISSING_KEY_SUMMARY};
pub use client::GeminiClient;
pub use error::LlmError;
