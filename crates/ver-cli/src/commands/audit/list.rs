use chrono::{DateTime, Utc};
use serde::Serialize;
use ver_core::entities::AuditEntry;
use ver_core::enums::ComplianceStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct AuditListResponse {
    engagement_id: String,
    entries: Vec<AuditRow>,
}

/// Compact view of one audit entry; `vrd audit get` restores the full run.
#[derive(Debug, Serialize)]
struct AuditRow {
    id: String,
    timestamp: DateTime<Utc>,
    status: ComplianceStatus,
    issues: usize,
    regulations: String,
    summary: String,
}

impl From<&AuditEntry> for AuditRow {
    fn from(entry: &AuditEntry) -> Self {
        Self {
            id: entry.id.clone(),
            timestamp: entry.timestamp,
            status: entry.analysis_result.compliance_status,
            issues: entry.analysis_result.issues.len(),
            regulations: entry.regulation_ids.join(","),
            summary: entry.analysis_result.summary.clone(),
        }
    }
}

pub fn run(status: Option<&str>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let engagement = ctx
        .store
        .active()
        .ok_or_else(|| anyhow::anyhow!("no active engagement"))?;
    let status = status
        .map(|value| parse_enum::<ComplianceStatus>(value, "status"))
        .transpose()?;
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);

    let entries = filter_entries(&engagement.audit_trail, status)
        .into_iter()
        .take(limit)
        .map(AuditRow::from)
        .collect();

    output(
        &AuditListResponse {
            engagement_id: engagement.id.clone(),
            entries,
        },
        flags.format,
    )
}

fn filter_entries(trail: &[AuditEntry], status: Option<ComplianceStatus>) -> Vec<&AuditEntry> {
    trail
        .iter()
        .filter(|entry| {
            status.is_none_or(|status| entry.analysis_result.compliance_status == status)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use ver_core::entities::{AnalysisResult, AuditEntry};
    use ver_core::enums::ComplianceStatus;

    use super::{AuditRow, filter_entries};

    fn entry(id: &str, status: ComplianceStatus) -> AuditEntry {
        AuditEntry {
            id: id.to_string(),
            timestamp: Utc::now(),
            analysis_result: AnalysisResult {
                compliance_status: status,
                summary: String::from("summary"),
                issues: Vec::new(),
            },
            policy_text: String::from("policy"),
            regulation_ids: vec![String::from("gdpr"), String::from("hipaa")],
        }
    }

    #[test]
    fn filters_by_status_and_keeps_order() {
        let trail = vec![
            entry("audit-3", ComplianceStatus::NonCompliant),
            entry("audit-2", ComplianceStatus::Compliant),
            entry("audit-1", ComplianceStatus::NonCompliant),
        ];
        let ids = filter_entries(&trail, Some(ComplianceStatus::NonCompliant))
            .into_iter()
            .map(|entry| entry.id.as_str())
            .collect::<Vec<_>>();
        assert_eq!(ids, vec!["audit-3", "audit-1"]);
        assert_eq!(filter_entries(&trail, None).len(), 3);
    }

    #[test]
    fn row_joins_regulations() {
        let row = AuditRow::from(&entry("audit-1", ComplianceStatus::AnalysisFailed));
        assert_eq!(row.regulations, "gdpr,hipaa");
        assert_eq!(row.status, ComplianceStatus::AnalysisFailed);
    }
}
