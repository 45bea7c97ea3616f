use anyhow::Context;

use crate::cli::root_commands::InputArgs;

/// Resolve `--text` or `--file` to the text to analyze.
pub async fn read_input(input: &InputArgs, media_type: Option<&str>) -> anyhow::Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }

    let Some(path) = &input.file else {
        anyhow::bail!("either --text or --file is required");
    };
    let (kind, text) = ver_extract::extract_file(path, media_type)
        .await
        .with_context(|| format!("Failed to load {}", display_name(path)))?;
    tracing::info!(file = %path.display(), %kind, characters = text.chars().count(), "loaded document");
    Ok(text)
}

/// File name shown in status messages.
pub fn display_name(path: &std::path::Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}
