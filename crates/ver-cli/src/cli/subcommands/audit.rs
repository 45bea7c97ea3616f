use clap::Subcommand;

/// Audit trail commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AuditCommands {
    /// List audit entries of the active engagement, newest first.
    List {
        /// Only entries with this compliance status (e.g. non-compliant).
        #[arg(long)]
        status: Option<String>,
    },
    /// Restore a past analysis: result, policy text, and regulations.
    Get { id: String },
}
