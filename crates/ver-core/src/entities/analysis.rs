use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ComplianceStatus, Severity};

/// Before/after snippet showing how to apply a recommendation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RecommendationExample {
    pub before: String,
    pub after: String,
}

/// One finding of non-conformance with a regulation.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceIssue {
    pub clause: String,
    pub issue_description: String,
    pub severity: Severity,
    pub recommendation: String,
    pub regulation_id: String,
    pub regulation_link: String,
    pub recommendation_example: RecommendationExample,
    pub risk_analysis: String,
    pub mitigation: String,
}

/// Outcome of a compliance analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub compliance_status: ComplianceStatus,
    pub summary: String,
    pub issues: Vec<ComplianceIssue>,
}

impl AnalysisResult {
    /// Build an `ANALYSIS_FAILED` result. Always carries no issues.
    #[must_use]
    pub fn failed(summary: impl Into<String>) -> Self {
        Self {
            compliance_status: ComplianceStatus::AnalysisFailed,
            summary: summary.into(),
            issues: Vec::new(),
        }
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.compliance_status == ComplianceStatus::AnalysisFailed
    }

    /// Number of issues with the given severity.
    #[must_use]
    pub fn count_severity(&self, severity: Severity) -> usize {
        self.issues
            .iter()
            .filter(|issue| issue.severity == severity)
            .count()
    }
}
