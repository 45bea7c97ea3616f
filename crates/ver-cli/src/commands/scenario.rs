use std::time::Duration;

use ver_core::responses::ScenarioResponse;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScenarioArgs;
use crate::commands::shared::input::read_input;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// The spinner gives up after this long; the request itself keeps running.
const SPINNER_FAILSAFE: Duration = Duration::from_secs(10);

/// Handle `vrd scenario`.
pub async fn run(
    args: &ScenarioArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = read_input(&args.input, args.media_type.as_deref()).await?;
    let response = execute(ctx, &text).await?;
    output(&response, flags.format)
}

/// Run a scenario. A missing report is a `failed` response, not an error.
pub async fn execute(ctx: &AppContext, scenario_text: &str) -> anyhow::Result<ScenarioResponse> {
    if scenario_text.trim().is_empty() {
        anyhow::bail!("scenario text is empty");
    }

    let report = with_spinner(
        "Modeling scenario…",
        Some(SPINNER_FAILSAFE),
        ctx.llm.run_scenario(scenario_text),
    )
    .await;
    Ok(ScenarioResponse::from(report))
}
