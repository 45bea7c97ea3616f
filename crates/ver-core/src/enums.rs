//! Closed enumerations for compliance verdicts, severities, risk levels and
//! scenario outcome titles.
//!
//! Serialized spellings match the persisted engagement format and the model's
//! response schema exactly (`NON_COMPLIANT`, `High`, `Best Case`, ...).

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// ComplianceStatus
// ---------------------------------------------------------------------------

/// Overall verdict of a compliance analysis run.
///
/// `AnalysisFailed` is never produced by the model; the analysis client uses
/// it to report configuration, transport and parse failures as a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ComplianceStatus {
    Compliant,
    NonCompliant,
    NeedsReview,
    AnalysisFailed,
}

impl ComplianceStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Compliant => "COMPLIANT",
            Self::NonCompliant => "NON_COMPLIANT",
            Self::NeedsReview => "NEEDS_REVIEW",
            Self::AnalysisFailed => "ANALYSIS_FAILED",
        }
    }
}

impl fmt::Display for ComplianceStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ReportedStatus
// ---------------------------------------------------------------------------

/// The subset of [`ComplianceStatus`] the model is allowed to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportedStatus {
    Compliant,
    NonCompliant,
    NeedsReview,
}

impl From<ReportedStatus> for ComplianceStatus {
    fn from(status: ReportedStatus) -> Self {
        match status {
            ReportedStatus::Compliant => Self::Compliant,
            ReportedStatus::NonCompliant => Self::NonCompliant,
            ReportedStatus::NeedsReview => Self::NeedsReview,
        }
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a single compliance issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum Severity {
    High,
    Medium,
    Low,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::High => "High",
            Self::Medium => "Medium",
            Self::Low => "Low",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// RiskLevel
// ---------------------------------------------------------------------------

/// Likelihood or impact score in a scenario risk matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// OutcomeTitle
// ---------------------------------------------------------------------------

/// The three fixed scenario outcome titles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub enum OutcomeTitle {
    #[serde(rename = "Best Case")]
    BestCase,
    #[serde(rename = "Most Likely")]
    MostLikely,
    #[serde(rename = "Worst Case")]
    WorstCase,
}

impl OutcomeTitle {
    /// All titles, in report order.
    pub const ALL: [Self; 3] = [Self::BestCase, Self::MostLikely, Self::WorstCase];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::BestCase => "Best Case",
            Self::MostLikely => "Most Likely",
            Self::WorstCase => "Worst Case",
        }
    }
}

impl fmt::Display for OutcomeTitle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutcomeTitle {
    type Err = CoreError;

    /// Accepts the exact display titles only.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|title| title.as_str() == s)
            .ok_or_else(|| CoreError::Validation(format!("unknown outcome title '{s}'")))
    }
}
