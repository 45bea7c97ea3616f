use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Analyze(args) => commands::analyze::run(&args, ctx, flags).await,
        Commands::Scenario(args) => commands::scenario::run(&args, ctx, flags).await,
        Commands::Engagement { action } => commands::engagement::handle(&action, ctx, flags),
        Commands::Audit { action } => commands::audit::handle(&action, ctx, flags),
        Commands::Regulation { .. } | Commands::Extract(_) | Commands::Schema(_) => {
            unreachable!("regulation/extract/schema are pre-dispatched in main")
        }
    }
}
