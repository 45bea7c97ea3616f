mod create;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::EngagementCommands;
use crate::context::AppContext;

/// Handle `vrd engagement`.
pub fn handle(
    action: &EngagementCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        EngagementCommands::Create { name } => create::run(name, ctx, flags),
        EngagementCommands::List => list::run(ctx, flags),
        EngagementCommands::Get { id } => get::run(id, ctx, flags),
    }
}
