use clap::Subcommand;

/// Engagement commands.
#[derive(Clone, Debug, Subcommand)]
pub enum EngagementCommands {
    /// Create an engagement and make it active for this run.
    ///
    /// The selection is not saved; later runs pick their engagement from
    /// `--engagement` or `general.engagement`.
    Create { name: String },
    /// List engagements with their audit trail sizes.
    List,
    /// Get an engagement with its full audit trail.
    Get { id: String },
}
