use anyhow::Context;
use serde::Serialize;
use ver_core::entities::Engagement;
use ver_core::responses::EngagementSummary;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// The new engagement plus how to keep using it.
///
/// `active` only covers the current process; each `vrd` run selects its
/// engagement again from `--engagement` or `general.engagement`.
#[derive(Debug, Serialize)]
struct EngagementCreateResponse {
    #[serde(flatten)]
    engagement: EngagementSummary,
    next: String,
}

impl EngagementCreateResponse {
    fn new(engagement: &Engagement) -> Self {
        Self {
            engagement: EngagementSummary::new(engagement, true),
            next: format!(
                "pass --engagement {id} (or set general.engagement = \"{id}\") to record later runs here",
                id = engagement.id
            ),
        }
    }
}

pub fn run(name: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let engagement = ctx
        .store
        .create(name)
        .context("failed to create engagement")?;
    output(&EngagementCreateResponse::new(&engagement), flags.format)
}
