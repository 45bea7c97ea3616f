//! # ver-core
//!
//! Core types, ID generation, and error types for Veridian.
//!
//! This crate provides the foundational types shared across all Veridian crates:
//! - Entity structs for all domain objects (engagements, audit entries, analysis
//!   and scenario results)
//! - Closed enums for compliance status, severity, risk level and outcome titles
//! - The static regulation catalog and its derived views
//! - ID prefix constants and generation
//! - Cross-cutting error types
//! - ROI estimation for analysis results
//! - CLI response types

pub mod catalog;
pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod model_output;
pub mod responses;
pub mod roi;
