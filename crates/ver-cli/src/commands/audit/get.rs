use ver_core::responses::AuditRestoreResponse;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Restore a past run: its result, the policy text, and the regulation selection.
pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let (engagement, entry) = ctx
        .store
        .find_audit_entry(id)
        .ok_or_else(|| anyhow::anyhow!("audit entry '{id}' not found"))?;

    output(
        &AuditRestoreResponse {
            engagement_id: engagement.id.clone(),
            engagement_name: engagement.name.clone(),
            entry: entry.clone(),
        },
        flags.format,
    )
}
