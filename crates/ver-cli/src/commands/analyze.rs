use anyhow::Context;
use ver_core::catalog;
use ver_core::responses::AnalyzeResponse;
use ver_core::roi::RoiEstimate;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::AnalyzeArgs;
use crate::commands::shared::input::read_input;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::with_spinner;

/// Handle `vrd analyze`.
pub async fn run(
    args: &AnalyzeArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let text = read_input(&args.input, args.media_type.as_deref()).await?;
    let response = execute(ctx, &text, &args.regulation).await?;
    output(&response, flags.format)
}

/// Analyze `policy_text` and record the run in the active engagement.
///
/// Failed analyses are recorded too, so the trail shows every attempt.
pub async fn execute(
    ctx: &mut AppContext,
    policy_text: &str,
    regulation_ids: &[String],
) -> anyhow::Result<AnalyzeResponse> {
    if policy_text.trim().is_empty() {
        anyhow::bail!("policy text is empty");
    }
    let regulations = catalog::resolve(regulation_ids);
    if regulations.is_empty() {
        anyhow::bail!(
            "no valid regulations selected (got {:?}); see `vrd regulation list`",
            regulation_ids
        );
    }
    let resolved_ids = regulations
        .iter()
        .map(|regulation| regulation.id.clone())
        .collect::<Vec<_>>();
    let engagement_id = ctx.active_engagement_id()?;

    let result = with_spinner(
        "Analyzing policy…",
        None,
        ctx.llm.analyze(policy_text, &resolved_ids),
    )
    .await?;

    let entry = ctx
        .store
        .add_audit_entry(&engagement_id, result, policy_text, resolved_ids)
        .context("failed to record analysis in the audit trail")?;

    Ok(AnalyzeResponse {
        engagement_id,
        audit_entry_id: entry.id,
        roi: RoiEstimate::for_result(&entry.analysis_result),
        result: entry.analysis_result,
    })
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};
    use tempfile::TempDir;
    use ver_config::{GeminiConfig, VerConfig};
    use ver_core::enums::ComplianceStatus;
    use ver_llm::{API_ERROR_SUMMARY, MISSING_KEY_SUMMARY};
    use ver_store::EngagementStore;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::execute;
    use crate::context::AppContext;

    fn context(dir: &TempDir, endpoint: &str, api_key: &str) -> AppContext {
        let config = VerConfig {
            gemini: GeminiConfig {
                api_key: api_key.into(),
                endpoint: endpoint.into(),
                ..Default::default()
            },
            ..Default::default()
        };
        let store = EngagementStore::open(dir.path().join("engagements.json")).unwrap();
        AppContext::from_parts(config, store).unwrap()
    }

    fn candidate(payload: &Value) -> Value {
        json!({
            "candidates": [{ "content": { "parts": [{ "text": payload.to_string() }] } }]
        })
    }

    fn non_compliant() -> Value {
        json!({
            "complianceStatus": "NON_COMPLIANT",
            "summary": "Indefinite retention breaches storage limitation.",
            "issues": [{
                "clause": "We store user data indefinitely",
                "issueDescription": "No retention limit.",
                "severity": "High",
                "recommendation": "Set a retention period.",
                "regulationId": "gdpr",
                "regulationLink": "https://gdpr-info.eu/art-5-gdpr/",
                "recommendationExample": { "before": "indefinitely", "after": "for 24 months" },
                "riskAnalysis": "Fines.",
                "mitigation": "Automated deletion."
            }]
        })
    }

    #[tokio::test]
    async fn analysis_is_recorded_in_new_engagement() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(candidate(&non_compliant())))
            .expect(1)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, &server.uri(), "test-key");
        let engagement = ctx.store.create("Q1 Review").unwrap();

        let response = execute(
            &mut ctx,
            "We store user data indefinitely.",
            &["gdpr".to_string(), "made_up".to_string()],
        )
        .await
        .unwrap();

        assert_eq!(response.engagement_id, engagement.id);
        assert_eq!(response.result.compliance_status, ComplianceStatus::NonCompliant);
        assert_eq!(response.roi.as_ref().map(|roi| roi.hours_saved), Some(8));

        let reopened = EngagementStore::open(dir.path().join("engagements.json")).unwrap();
        let saved = reopened.get(&engagement.id).unwrap();
        assert_eq!(saved.audit_trail.len(), 1);
        let entry = &saved.audit_trail[0];
        assert_eq!(entry.id, response.audit_entry_id);
        assert_eq!(entry.policy_text, "We store user data indefinitely.");
        assert_eq!(entry.regulation_ids, vec!["gdpr"]);
    }

    #[tokio::test]
    async fn no_valid_regulations_sends_and_records_nothing() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, &server.uri(), "test-key");
        let err = execute(&mut ctx, "Policy", &["nope".to_string()]).await.unwrap_err();
        assert!(err.to_string().contains("no valid regulations"));
        assert!(ctx.store.active().unwrap().audit_trail.is_empty());
    }

    #[tokio::test]
    async fn failed_analysis_is_still_recorded() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, &server.uri(), "test-key");
        let response = execute(&mut ctx, "Policy", &["hipaa".to_string()]).await.unwrap();

        assert_eq!(response.result.compliance_status, ComplianceStatus::AnalysisFailed);
        assert_eq!(response.result.summary, API_ERROR_SUMMARY);
        assert!(response.roi.is_none());
        assert_eq!(ctx.store.active().unwrap().audit_trail.len(), 1);
    }

    #[tokio::test]
    async fn missing_key_is_recorded_as_failed() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, "http://127.0.0.1:9", "");
        let response = execute(&mut ctx, "Policy", &["sox".to_string()]).await.unwrap();
        assert_eq!(response.result.summary, MISSING_KEY_SUMMARY);
        assert_eq!(ctx.store.active().unwrap().audit_trail.len(), 1);
    }

    #[tokio::test]
    async fn blank_policy_is_rejected() {
        let dir = TempDir::new().unwrap();
        let mut ctx = context(&dir, "http://127.0.0.1:9", "test-key");
        assert!(execute(&mut ctx, "  \n", &["gdpr".to_string()]).await.is_err());
    }
}
