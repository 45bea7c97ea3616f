//! Estimated return on investment of an automated analysis run.
//!
//! Heuristic: each issue stands in for a fixed number of senior consultant
//! hours depending on its severity, billed at a flat hourly rate. An automated
//! run is assumed to take two minutes.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::AnalysisResult;
use crate::enums::Severity;

/// Average hourly rate of a senior compliance consultant, in dollars.
pub const CONSULTANT_HOURLY_RATE: u32 = 350;

/// Minutes an automated analysis run is assumed to take.
const AUTOMATED_RUN_MINUTES: f64 = 2.0;

/// Consultant hours replaced by one issue of the given severity.
#[must_use]
pub const fn hours_per_issue(severity: Severity) -> u32 {
    match severity {
        Severity::High => 8,
        Severity::Medium => 4,
        Severity::Low => 1,
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct RoiEstimate {
    pub hours_saved: u32,
    pub cost_saved: u32,
    /// Fraction of manual review time removed, in `[0, 1)`.
    pub time_reduction: f64,
}

impl RoiEstimate {
    /// Estimate savings for a result. `None` when the result has no issues.
    #[must_use]
    pub fn for_result(result: &AnalysisResult) -> Option<Self> {
        if result.issues.is_empty() {
            return None;
        }

        let hours_saved: u32 = result
            .issues
            .iter()
            .map(|issue| hours_per_issue(issue.severity))
            .sum();
        let time_reduction = if hours_saved > 0 {
            1.0 - (AUTOMATED_RUN_MINUTES / 60.0) / f64::from(hours_saved)
        } else {
            0.0
        };

        Some(Self {
            hours_saved,
            cost_saved: hours_saved * CONSULTANT_HOURLY_RATE,
            time_reduction,
        })
    }
}
