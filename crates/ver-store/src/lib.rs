//! # ver-store
//!
//! Engagements and their audit trails, persisted as a single JSON file.
//!
//! Reads are forgiving: a missing or corrupt file bootstraps a
//! `"Default Project"` engagement. Writes are strict: the whole collection is
//! written atomically and a failed write is returned to the caller with memory
//! left unchanged.

mod error;
mod store;

pub use error::StoreError;
pub use store::{CORRUPT_SUFFIX, DEFAULT_ENGAGEMENT_NAME, EngagementStore};
