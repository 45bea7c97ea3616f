use ver_core::entities::Engagement;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let engagement: &Engagement = ctx
        .store
        .get(id)
        .ok_or_else(|| anyhow::anyhow!("engagement '{id}' not found"))?;
    output(engagement, flags.format)
}
