use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AnalysisResult;

/// Immutable snapshot of one completed analysis run.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct AuditEntry {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub analysis_result: AnalysisResult,
    pub policy_text: String,
    pub regulation_ids: Vec<String>,
}
