//! Predictive "what-if" scenario modeling.

use ver_core::entities::ScenarioResult;

use crate::client::GeminiClient;
use crate::error::LlmError;
use crate::prompt;

impl GeminiClient {
    /// Run a scenario and return the validated report, or why there is none.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidInput` for blank text, `LlmError::NotConfigured`
    /// without an API key, and transport, parse, or validation errors for a
    /// failed or malformed response. A partial report is never returned.
    pub async fn try_run_scenario(&self, scenario_text: &str) -> Result<ScenarioResult, LlmError> {
        if scenario_text.trim().is_empty() {
            return Err(LlmError::InvalidInput("scenario text is empty".into()));
        }

        let prompt = prompt::scenario_prompt(scenario_text);
        let schema = prompt::scenario_response_schema();
        let result: ScenarioResult = self
            .generate(
                &prompt,
                &schema,
                self.config().scenario_temperature,
                "scenario_result",
            )
            .await?;
        result.validate()?;

        tracing::info!(
            risks = result.risk_matrix.len(),
            recommendations = result.recommendations.len(),
            opportunities = result.opportunities.len(),
            "scenario analysis complete"
        );
        Ok(result)
    }

    /// Run a scenario. Any failure is logged and yields `None`.
    pub async fn run_scenario(&self, scenario_text: &str) -> Option<ScenarioResult> {
        match self.try_run_scenario(scenario_text).await {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::error!(error = %e, "scenario analysis failed");
                None
            }
        }
    }
}
