//! # ver-schema
//!
//! JSON Schema registry and validation for Veridian.
//!
//! Entity types are defined in `ver-core` with `#[derive(JsonSchema)]`. This
//! crate builds the registry over them and validates untrusted JSON: model
//! output in `ver-llm`, the engagement file in `ver-store`, and schema export
//! for `vrd schema`.

mod error;
mod registry;

pub use error::SchemaError;
pub use registry::SchemaRegistry;
