mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::AuditCommands;
use crate::context::AppContext;

/// Handle `vrd audit`.
pub fn handle(
    action: &AuditCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AuditCommands::List { status } => list::run(status.as_deref(), ctx, flags),
        AuditCommands::Get { id } => get::run(id, ctx, flags),
    }
}
