use serde::Serialize;
use ver_core::responses::EngagementSummary;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::effective_limit;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct EngagementListResponse {
    engagements: Vec<EngagementSummary>,
}

pub fn run(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let limit = effective_limit(flags.limit, ctx.config.general.default_limit);
    let active_id = ctx.store.active().map(|engagement| engagement.id.as_str());
    let engagements = ctx
        .store
        .list()
        .iter()
        .take(limit)
        .map(|engagement| {
            EngagementSummary::new(engagement, Some(engagement.id.as_str()) == active_id)
        })
        .collect();

    output(&EngagementListResponse { engagements }, flags.format)
}
