//! Raw payload shapes returned by the generative model.
//!
//! These are validated against their JSON Schema before being turned into
//! domain records, so the model can never claim `ANALYSIS_FAILED` itself.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnalysisResult, ComplianceIssue};
use crate::enums::{ComplianceStatus, ReportedStatus, Severity};

/// Compliance analysis exactly as the model reported it.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ModelAnalysis {
    pub compliance_status: ReportedStatus,
    pub summary: String,
    pub issues: Vec<ComplianceIssue>,
}

impl From<ModelAnalysis> for AnalysisResult {
    /// A `COMPLIANT` verdict that still lists a `High` severity issue is
    /// escalated to `NON_COMPLIANT`.
    fn from(model: ModelAnalysis) -> Self {
        let mut status = ComplianceStatus::from(model.compliance_status);
        if status == ComplianceStatus::Compliant
            && model
                .issues
                .iter()
                .any(|issue| issue.severity == Severity::High)
        {
            status = ComplianceStatus::NonCompliant;
        }

        Self {
            compliance_status: status,
            summary: model.summary,
            issues: model.issues,
        }
    }
}
