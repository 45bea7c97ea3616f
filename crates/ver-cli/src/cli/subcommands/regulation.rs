use clap::Subcommand;

/// Regulation catalog commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RegulationCommands {
    /// List regulations.
    List {
        /// Case-insensitive match on name or region.
        #[arg(long)]
        search: Option<String>,
        /// Group by region.
        #[arg(long)]
        grouped: bool,
    },
    /// Get a regulation by ID.
    Get { id: String },
}
