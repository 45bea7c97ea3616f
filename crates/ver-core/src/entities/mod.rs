//! Entity structs for all Veridian domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`. Field names
//! serialize in camelCase so the engagement file is the direct JSON form of
//! these types.

mod analysis;
mod audit;
mod engagement;
mod regulation;
mod scenario;

pub use analysis::{AnalysisResult, ComplianceIssue, RecommendationExample};
pub use audit::AuditEntry;
pub use engagement::Engagement;
pub use regulation::Regulation;
pub use scenario::{
    ScenarioOutcome, ScenarioRecommendation, ScenarioResult, ScenarioRisk, StrategicOpportunity,
};
