//! Multi-agent compliance analysis.

use ver_core::catalog;
use ver_core::entities::AnalysisResult;
use ver_core::model_output::ModelAnalysis;

use crate::client::GeminiClient;
use crate::error::LlmError;
use crate::prompt;

/// Summary used when no API key is configured.
pub const MISSING_KEY_SUMMARY: &str = "API Key is not configured. Please ensure the GEMINI_API_KEY (or API_KEY) environment variable is set.";

/// Summary used for every other remote or parse failure.
pub const API_ERROR_SUMMARY: &str = "The analysis could not be completed due to an API error. This may be due to content safety restrictions or an invalid API key. Check the logs for details.";

impl GeminiClient {
    /// Analyze a policy document against the selected regulations.
    ///
    /// Remote failures never surface as errors: a missing key, transport
    /// failure, blocked prompt, or malformed response all yield an
    /// `ANALYSIS_FAILED` result with an explanatory summary.
    ///
    /// # Errors
    ///
    /// Returns `LlmError::InvalidInput` before any request when the policy
    /// text is blank or no id resolves to a known regulation.
    pub async fn analyze<S: AsRef<str>>(
        &self,
        policy_text: &str,
        regulation_ids: &[S],
    ) -> Result<AnalysisResult, LlmError> {
        if policy_text.trim().is_empty() {
            return Err(LlmError::InvalidInput("policy text is empty".into()));
        }
        let regulations = catalog::resolve(regulation_ids);
        if regulations.is_empty() {
            return Err(LlmError::InvalidInput(
                "no valid regulations selected".into(),
            ));
        }

        let prompt = prompt::analysis_prompt(&regulations, policy_text);
        let schema = prompt::analysis_response_schema();
        let outcome = self
            .generate::<ModelAnalysis>(
                &prompt,
                &schema,
                self.config().analysis_temperature,
                "model_analysis",
            )
            .await;

        match outcome {
            Ok(model) => {
                let result = AnalysisResult::from(model);
                tracing::info!(
                    status = %result.compliance_status,
                    issues = result.issues.len(),
                    regulations = regulations.len(),
                    "compliance analysis complete"
                );
                Ok(result)
            }
            Err(LlmError::NotConfigured) => {
                tracing::warn!("compliance analysis skipped: API key is not configured");
                Ok(AnalysisResult::failed(MISSING_KEY_SUMMARY))
            }
            Err(e) => {
                tracing::error!(error = %e, "compliance analysis failed");
                Ok(AnalysisResult::failed(API_ERROR_SUMMARY))
            }
        }
    }
}
