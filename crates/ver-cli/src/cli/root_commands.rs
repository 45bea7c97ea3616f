use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AuditCommands, EngagementCommands, RegulationCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Analyze a policy document against selected regulations.
    Analyze(AnalyzeArgs),
    /// Model the risks and outcomes of a policy scenario.
    Scenario(ScenarioArgs),
    /// Engagement management.
    Engagement {
        #[command(subcommand)]
        action: EngagementCommands,
    },
    /// Audit trail of the active engagement.
    Audit {
        #[command(subcommand)]
        action: AuditCommands,
    },
    /// Browse the regulation catalog.
    Regulation {
        #[command(subcommand)]
        action: RegulationCommands,
    },
    /// Extract plain text from a TXT, PDF, or DOCX file.
    Extract(ExtractArgs),
    /// Dump JSON schema for a registered type.
    Schema(SchemaArgs),
}

/// Policy or scenario text, given inline or as a document.
#[derive(Clone, Debug, Args)]
#[group(required = true, multiple = false)]
pub struct InputArgs {
    /// Inline text.
    #[arg(long)]
    pub text: Option<String>,
    /// Read text from a TXT, PDF, or DOCX file.
    #[arg(long)]
    pub file: Option<PathBuf>,
}

/// Arguments for `vrd analyze`.
#[derive(Clone, Debug, Args)]
pub struct AnalyzeArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Media type of --file, overriding its extension.
    #[arg(long, requires = "file")]
    pub media_type: Option<String>,
    /// Regulation id to check against (repeatable or comma-separated).
    #[arg(short, long, value_delimiter = ',')]
    pub regulation: Vec<String>,
}

/// Arguments for `vrd scenario`.
#[derive(Clone, Debug, Args)]
pub struct ScenarioArgs {
    #[command(flatten)]
    pub input: InputArgs,
    /// Media type of --file, overriding its extension.
    #[arg(long, requires = "file")]
    pub media_type: Option<String>,
}

/// Arguments for `vrd extract`.
#[derive(Clone, Debug, Args)]
pub struct ExtractArgs {
    pub file: PathBuf,
    /// Declared media type, overriding the file extension.
    #[arg(long)]
    pub media_type: Option<String>,
}

/// Arguments for `vrd schema`.
#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    pub type_name: String,
}
