//! Central schema registry for all Veridian types.
//!
//! The `SchemaRegistry` builds JSON Schemas from ver-core types at construction
//! time using [`schemars::schema_for!`] and validates via `jsonschema`.

use std::collections::HashMap;

use schemars::schema_for;

use crate::error::SchemaError;

/// Central store of all JSON Schemas in Veridian, keyed by name.
pub struct SchemaRegistry {
    schemas: HashMap<&'static str, serde_json::Value>,
}

/// Insert a schema into the map as a `serde_json::Value`.
macro_rules! register {
    ($map:expr, $name:expr, $ty:ty) => {
        $map.insert($name, schema_for!($ty).to_value());
    };
}

impl SchemaRegistry {
    /// Build a registry with every entity, model-output, and response schema.
    #[must_use]
    pub fn new() -> Self {
        let mut schemas = HashMap::new();

        // --- Entity types (6) ---
        register!(schemas, "regulation", ver_core::entities::Regulation);
        register!(
            schemas,
            "compliance_issue",
            ver_core::entities::ComplianceIssue
        );
        register!(
            schemas,
            "analysis_result",
            ver_core::entities::AnalysisResult
        );
        register!(schemas, "audit_entry", ver_core::entities::AuditEntry);
        register!(schemas, "engagement", ver_core::entities::Engagement);
        register!(
            schemas,
            "scenario_result",
            ver_core::entities::ScenarioResult
        );

        // --- Model output (1) ---
        register!(
            schemas,
            "model_analysis",
            ver_core::model_output::ModelAnalysis
        );

        // --- Derived and CLI response types (3) ---
        register!(schemas, "roi_estimate", ver_core::roi::RoiEstimate);
        register!(
            schemas,
            "analyze_response",
            ver_core::responses::AnalyzeResponse
        );
        register!(
            schemas,
            "scenario_response",
            ver_core::responses::ScenarioResponse
        );

        Self { schemas }
    }

    /// Get a schema by name. Returns `None` if not found.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&serde_json::Value> {
        self.schemas.get(name)
    }

    /// Validate a JSON value against a named schema.
    ///
    /// # Errors
    ///
    /// Returns `SchemaError::NotFound` if the schema name is unknown, or
    /// `SchemaError::ValidationFailed` if validation produces errors.
    pub fn validate(&self, name: &str, instance: &serde_json::Value) -> Result<(), SchemaError> {
        let schema = self
            .get(name)
            .ok_or_else(|| SchemaError::NotFound(name.to_string()))?;

        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaError::Generation(format!("{e}")))?;

        let errors: Vec<String> = validator
            .iter_errors(instance)
            .map(|e| format!("{e}"))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(SchemaError::ValidationFailed { errors })
        }
    }

    /// All registered schema names, sorted.
    #[must_use]
    pub fn list(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = self.schemas.keys().copied().collect();
        names.sort_unstable();
        names
    }

    #[must_use]
    pub fn schema_count(&self) -> usize {
        self.schemas.len()
    }
}

impl Default for SchemaRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use pretty_assertions::assert_eq;
    use ver_core::entities::{AnalysisResult, Engagement};

    fn registry() -> SchemaRegistry {
        SchemaRegistry::new()
    }

    #[test]
    fn registry_has_expected_count() {
        // 6 entities + 1 model output + 3 responses
        assert_eq!(registry().schema_count(), 10);
    }

    #[test]
    fn registry_list_is_sorted() {
        let names = registry().list();
        let mut sorted = names.clone();
        sorted.sort_unstable();
        assert_eq!(names, sorted);
        assert_eq!(names.first(), Some(&"analysis_result"));
    }

    #[test]
    fn get_existing_and_missing() {
        let reg = registry();
        assert!(reg.get("model_analysis").is_some());
        assert!(reg.get("scenario_result").is_some());
        assert!(reg.get("nonexistent").is_none());
    }

    #[test]
    fn validate_failed_analysis_result() {
        let json = serde_json::to_value(AnalysisResult::failed("offline")).unwrap();
        assert!(registry().validate("analysis_result", &json).is_ok());
    }

    #[test]
    fn validate_engagement_file_entry() {
        let engagement = Engagement {
            id: "eng-a1b2c3d4".into(),
            name: "Default Project".into(),
            created_at: Utc::now(),
            audit_trail: Vec::new(),
        };
        let json = serde_json::to_value(&engagement).unwrap();
        assert!(registry().validate("engagement", &json).is_ok());
    }

    #[test]
    fn model_analysis_rejects_failed_status() {
        let invalid = serde_json::json!({
            "complianceStatus": "ANALYSIS_FAILED",
            "summary": "The model should never report this",
            "issues": []
        });
        let result = registry().validate("model_analysis", &invalid);
        assert!(matches!(result, Err(SchemaError::ValidationFailed { .. })));
    }

    #[test]
    fn model_analysis_rejects_missing_summary() {
        let invalid = serde_json::json!({
            "complianceStatus": "COMPLIANT",
            "issues": []
        });
        let Err(SchemaError::ValidationFailed { errors }) =
            registry().validate("model_analysis", &invalid)
        else {
            panic!("expected ValidationFailed");
        };
        assert!(!errors.is_empty());
    }

    #[test]
    fn scenario_rejects_unknown_risk_level() {
        let invalid = serde_json::json!({
            "riskMatrix": [{
                "challenge": "c",
                "description": "d",
                "likelihood": "Extreme",
                "impact": "Low"
            }],
            "outcomes": [],
            "recommendations": [],
            "opportunities": []
        });
        assert!(registry().validate("scenario_result", &invalid).is_err());
    }

    #[test]
    fn validate_unknown_schema() {
        let result = registry().validate("nonexistent", &serde_json::json!({}));
        assert!(matches!(result, Err(SchemaError::NotFound(name)) if name == "nonexistent"));
    }
}
