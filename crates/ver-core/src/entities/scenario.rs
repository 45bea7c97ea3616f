use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{OutcomeTitle, RiskLevel};
use crate::errors::CoreError;

/// Minimum and maximum number of risk matrix rows in a scenario report.
pub const RISK_MATRIX_MIN: usize = 3;
pub const RISK_MATRIX_MAX: usize = 5;

/// One row of the scenario risk matrix.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScenarioRisk {
    pub challenge: String,
    pub description: String,
    pub likelihood: RiskLevel,
    pub impact: RiskLevel,
}

/// A narrative outcome under one of the fixed titles.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ScenarioOutcome {
    pub title: OutcomeTitle,
    pub description: String,
}

/// A recommendation with free-text resource estimates.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioRecommendation {
    pub recommendation: String,
    pub rationale: String,
    pub estimated_staffing: String,
    pub estimated_budget: String,
    pub estimated_timeline: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct StrategicOpportunity {
    pub opportunity: String,
    pub rationale: String,
}

/// Predictive "what-if" report. Held in memory only, never persisted.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ScenarioResult {
    pub risk_matrix: Vec<ScenarioRisk>,
    pub outcomes: Vec<ScenarioOutcome>,
    pub recommendations: Vec<ScenarioRecommendation>,
    pub opportunities: Vec<StrategicOpportunity>,
}

impl ScenarioResult {
    /// Look up an outcome by its display title.
    ///
    /// Only `Best Case`, `Most Likely` and `Worst Case` can match.
    #[must_use]
    pub fn outcome(&self, title: &str) -> Option<&ScenarioOutcome> {
        let title: OutcomeTitle = title.parse().ok()?;
        self.outcomes.iter().find(|outcome| outcome.title == title)
    }

    /// Check the structural rules the JSON schema cannot express: 3 to 5 risk
    /// rows and each fixed outcome title exactly once.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` describing the first violated rule.
    pub fn validate(&self) -> Result<(), CoreError> {
        let risks = self.risk_matrix.len();
        if !(RISK_MATRIX_MIN..=RISK_MATRIX_MAX).contains(&risks) {
            return Err(CoreError::Validation(format!(
                "risk matrix must have {RISK_MATRIX_MIN}-{RISK_MATRIX_MAX} entries, got {risks}"
            )));
        }

        if self.outcomes.len() != OutcomeTitle::ALL.len() {
            return Err(CoreError::Validation(format!(
                "expected exactly {} outcomes, got {}",
                OutcomeTitle::ALL.len(),
                self.outcomes.len()
            )));
        }

        for title in OutcomeTitle::ALL {
            let count = self
                .outcomes
                .iter()
                .filter(|outcome| outcome.title == title)
                .count();
            if count != 1 {
                return Err(CoreError::Validation(format!(
                    "outcome '{title}' must appear exactly once, found {count}"
                )));
            }
        }

        Ok(())
    }
}
