use anyhow::Context;
use ver_core::responses::ExtractResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ExtractArgs;
use crate::commands::shared::input::display_name;
use crate::output::output;

/// Handle `vrd extract`.
pub async fn handle(args: &ExtractArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let response = execute(args).await?;
    output(&response, flags.format)
}

async fn execute(args: &ExtractArgs) -> anyhow::Result<ExtractResponse> {
    let name = display_name(&args.file);
    let (kind, text) = ver_extract::extract_file(&args.file, args.media_type.as_deref())
        .await
        .with_context(|| format!("Failed to load {name}"))?;

    Ok(ExtractResponse {
        status: format!("Successfully loaded {name}"),
        kind: kind.to_string(),
        characters: text.chars().count(),
        file: name,
        text,
    })
}
