mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RegulationCommands;

/// Handle `vrd regulation`. The catalog is static, so no context is needed.
pub fn handle(action: &RegulationCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RegulationCommands::List { search, grouped } => {
            list::run(search.as_deref(), *grouped, flags)
        }
        RegulationCommands::Get { id } => get::run(id, flags),
    }
}
