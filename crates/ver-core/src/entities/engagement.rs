use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::AuditEntry;

/// A named client project grouping a history of compliance analyses.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Engagement {
    pub id: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
    /// Newest first.
    #[serde(default)]
    pub audit_trail: Vec<AuditEntry>,
}

impl Engagement {
    /// Most recent audit entry, if any.
    #[must_use]
    pub fn latest_entry(&self) -> Option<&AuditEntry> {
        self.audit_trail.first()
    }
}
