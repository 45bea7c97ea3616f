//! CLI response types returned as JSON by `vrd` commands.

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::{AnalysisResult, AuditEntry, Engagement, Regulation, ScenarioResult};
use crate::roi::RoiEstimate;

/// Response from `vrd analyze`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct AnalyzeResponse {
    pub engagement_id: String,
    pub audit_entry_id: String,
    pub result: AnalysisResult,
    pub roi: Option<RoiEstimate>,
}

/// Whether a scenario run produced a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ScenarioStatus {
    Ok,
    Failed,
}

/// Response from `vrd scenario`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScenarioResponse {
    pub status: ScenarioStatus,
    pub result: Option<ScenarioResult>,
}

impl From<Option<ScenarioResult>> for ScenarioResponse {
    fn from(result: Option<ScenarioResult>) -> Self {
        let status = if result.is_some() {
            ScenarioStatus::Ok
        } else {
            ScenarioStatus::Failed
        };
        Self { status, result }
    }
}

/// One row of `vrd engagement list`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct EngagementSummary {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub audit_entries: usize,
    pub active: bool,
}

impl EngagementSummary {
    #[must_use]
    pub fn new(engagement: &Engagement, active: bool) -> Self {
        Self {
            id: engagement.id.clone(),
            name: engagement.name.clone(),
            created_at: engagement.created_at,
            audit_entries: engagement.audit_trail.len(),
            active,
        }
    }
}

/// Response from `vrd audit get`: a past run restored for review.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct AuditRestoreResponse {
    pub engagement_id: String,
    pub engagement_name: String,
    pub entry: AuditEntry,
}

/// One region bucket of `vrd regulation list --grouped`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct RegulationGroup {
    pub region: String,
    pub regulations: Vec<Regulation>,
}

/// Response from `vrd extract`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ExtractResponse {
    pub file: String,
    pub kind: String,
    pub status: String,
    pub characters: usize,
    pub text: String,
}
