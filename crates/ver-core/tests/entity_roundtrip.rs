//! Serde roundtrip and JsonSchema validation tests for all entity types.

use chrono::Utc;
use schemars::schema_for;
use ver_core::entities::*;
use ver_core::enums::*;
use ver_core::model_output::ModelAnalysis;
use ver_core::responses::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            // Serde roundtrip
            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            // Schema validation
            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn sample_issue() -> ComplianceIssue {
    ComplianceIssue {
        clause: "We store user data indefinitely".into(),
        issue_description: "Personal data kept without a retention limit".into(),
        severity: Severity::High,
        recommendation: "Define and publish a retention period".into(),
        regulation_id: "gdpr".into(),
        regulation_link: "https://gdpr-info.eu/art-5-gdpr/".into(),
        recommendation_example: RecommendationExample {
            before: "We store user data indefinitely.".into(),
            after: "We store user data for 24 months after account closure.".into(),
        },
        risk_analysis: "Regulatory fines and reputational harm".into(),
        mitigation: "Adopt a retention schedule and automated deletion".into(),
    }
}

fn sample_result() -> AnalysisResult {
    AnalysisResult {
        compliance_status: ComplianceStatus::NonCompliant,
        summary: "Retention clause violates storage limitation.".into(),
        issues: vec![sample_issue()],
    }
}

fn sample_scenario() -> ScenarioResult {
    ScenarioResult {
        risk_matrix: vec![ScenarioRisk {
            challenge: "Procurement delays".into(),
            description: "New vendor rules lengthen approvals".into(),
            likelihood: RiskLevel::High,
            impact: RiskLevel::Medium,
        }],
        outcomes: OutcomeTitle::ALL
            .into_iter()
            .map(|title| ScenarioOutcome {
                title,
                description: format!("{title} path"),
            })
            .collect(),
        recommendations: vec![ScenarioRecommendation {
            recommendation: "Stand up a transition office".into(),
            rationale: "Centralises coordination".into(),
            estimated_staffing: "2 FTEs".into(),
            estimated_budget: "$5k - $10k".into(),
            estimated_timeline: "3-6 weeks".into(),
        }],
        opportunities: vec![StrategicOpportunity {
            opportunity: "Set new industry standards".into(),
            rationale: "Early adoption signals leadership".into(),
        }],
    }
}

roundtrip_and_validate!(
    regulation_roundtrip,
    Regulation,
    ver_core::catalog::find_by_id("gdpr").unwrap().clone()
);

roundtrip_and_validate!(compliance_issue_roundtrip, ComplianceIssue, sample_issue());

roundtrip_and_validate!(analysis_result_roundtrip, AnalysisResult, sample_result());

roundtrip_and_validate!(
    failed_result_roundtrip,
    AnalysisResult,
    AnalysisResult::failed("API key is not configured.")
);

roundtrip_and_validate!(
    audit_entry_roundtrip,
    AuditEntry,
    AuditEntry {
        id: "audit-3fa81c0d".into(),
        timestamp: Utc::now(),
        analysis_result: sample_result(),
        policy_text: "We store user data indefinitely".into(),
        regulation_ids: vec!["gdpr".into()],
    }
);

roundtrip_and_validate!(
    engagement_roundtrip,
    Engagement,
    Engagement {
        id: "eng-a1b2c3d4".into(),
        name: "Q1 Review".into(),
        created_at: Utc::now(),
        audit_trail: vec![AuditEntry {
            id: "audit-00ff00ff".into(),
            timestamp: Utc::now(),
            analysis_result: sample_result(),
            policy_text: "Policy".into(),
            regulation_ids: vec!["gdpr".into(), "hipaa".into()],
        }],
    }
);

roundtrip_and_validate!(scenario_roundtrip, ScenarioResult, sample_scenario());

roundtrip_and_validate!(
    model_analysis_roundtrip,
    ModelAnalysis,
    ModelAnalysis {
        compliance_status: ReportedStatus::NonCompliant,
        summary: "One blocking issue".into(),
        issues: vec![sample_issue()],
    }
);

roundtrip_and_validate!(
    analyze_response_roundtrip,
    AnalyzeResponse,
    AnalyzeResponse {
        engagement_id: "eng-a1b2c3d4".into(),
        audit_entry_id: "audit-3fa81c0d".into(),
        result: sample_result(),
        roi: None,
    }
);

roundtrip_and_validate!(
    scenario_response_roundtrip,
    ScenarioResponse,
    ScenarioResponse::from(Some(sample_scenario()))
);

#[test]
fn engagement_file_uses_camel_case_field_names() {
    let engagement = Engagement {
        id: "eng-a1b2c3d4".into(),
        name: "Default Project".into(),
        created_at: Utc::now(),
        audit_trail: Vec::new(),
    };
    let value = serde_json::to_value(&engagement).unwrap();
    assert!(value.get("createdAt").is_some());
    assert!(value.get("auditTrail").is_some());
}

#[test]
fn engagement_without_trail_field_deserializes_empty() {
    let json = r#"{"id":"eng-1","name":"Legacy","createdAt":"2026-01-01T00:00:00Z"}"#;
    let engagement: Engagement = serde_json::from_str(json).unwrap();
    assert!(engagement.audit_trail.is_empty());
}

#[test]
fn absent_scenario_maps_to_failed_status() {
    let response = ScenarioResponse::from(None);
    assert_eq!(response.status, ScenarioStatus::Failed);
    assert!(response.result.is_none());
}

#[test]
fn roi_estimate_matches_schema() {
    let roi = ver_core::roi::RoiEstimate::for_result(&sample_result()).unwrap();
    let schema = serde_json::to_value(schema_for!(ver_core::roi::RoiEstimate)).unwrap();
    let instance = serde_json::to_value(&roi).unwrap();
    assert!(validate_against_schema(&schema, &instance).is_empty());
    assert_eq!(instance["hoursSaved"], 8);
}
