//! Prompt text and Gemini response schemas.
//!
//! The response schemas use the API's OpenAPI subset (`OBJECT`, `STRING`,
//! `ARRAY`) and constrain decoding on the server side. Returned JSON is still
//! validated locally against the `ver-schema` registry.

use serde_json::{Value, json};
use ver_core::entities::Regulation;

/// One line per regulation: `- {name}: {description} (Source: {url|N/A})`.
#[must_use]
pub fn regulations_block(regulations: &[&Regulation]) -> String {
    regulations
        .iter()
        .map(|r| {
            format!(
                "- {}: {} (Source: {})",
                r.name,
                r.description,
                r.source_url.as_deref().unwrap_or("N/A")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Multi-agent compliance review prompt.
#[must_use]
pub fn analysis_prompt(regulations: &[&Regulation], policy_text: &str) -> String {
    let regulations_text = regulations_block(regulations);
    format!(
        r#"You are an automated, multi-agent government consulting platform. Your core function is to replace entire consulting engagements by providing end-to-end, agency-ready analysis. You will operate as a team of three specialized agents:
1.  **Legal Agent:** Identifies non-compliance by cross-referencing policy against statutes.
2.  **Risk Agent:** Assesses the strategic risk of each compliance gap.
3.  **Operations Agent:** Provides actionable mitigation and remediation steps.

Your task is to analyze the following policy document for compliance with ALL of the specified regulations.

**Regulations for Analysis:**
{regulations_text}

**Policy Document to Analyze:**
---
{policy_text}
---

Perform an exhaustive analysis. For each and every issue you discover, you MUST provide a structured JSON object with the following fields, simulating the combined output of your multi-agent team:
1.  **'regulationId'**: Pinpoint the exact regulation ID that is violated.
2.  **'issueDescription'**: Concisely explain the non-compliance issue.
3.  **'recommendation'**: Provide a clear, step-by-step recommendation for remediation.
4.  **'regulationLink'**: CRITICAL - Provide a deep, authoritative URL to the specific legal article or control being violated.
5.  **'recommendationExample'**: CRITICAL - Provide a "before" and "after" snippet from the policy. This is non-negotiable.
6.  **'riskAnalysis'**: CRITICAL - Provide a strategic analysis of the legal, operational, and compliance risks this issue poses. This is the output of your Risk Agent.
7.  **'mitigation'**: CRITICAL - Provide a concise, strategic plan to mitigate the identified risks. This is the output of your Operations Agent.

If the document is fully compliant, return an empty 'issues' array. Your analysis must be of the highest possible standard, ready for a senior government official.
"#
    )
}

/// Predictive what-if prompt for a policy scenario.
#[must_use]
pub fn scenario_prompt(scenario_text: &str) -> String {
    format!(
        r#"You are a high-end government strategy consultant from a top-tier firm, specializing in predictive analysis for senior policymakers. Your analysis must be neutral, quantitative, and strategically nuanced.

**Scenario to Analyze:**
---
{scenario_text}
---

Provide a comprehensive strategic analysis report in the following structured JSON format. Use measured, professional language and avoid hyperbole.

1.  **riskMatrix**: Create a table of the top 3-5 challenges. For each challenge, provide a 'description' that weaves in relevant legal or policy context. Score 'likelihood' and 'impact' on a Low/Medium/High scale.
2.  **outcomes**: Describe three distinct paths: 'Best Case', 'Most Likely', and 'Worst Case'. Frame these as narrative possibilities.
3.  **opportunities**: Identify 2-3 strategic opportunities or positive externalities that could be leveraged, even in a negative scenario (e.g., "Opportunity to set new industry standards").
4.  **recommendations**: For each recommendation, provide a 'rationale' and tangible resource estimates for 'estimatedStaffing', 'estimatedBudget', and 'estimatedTimeline'.

Your entire output must conform to the provided JSON schema. Your credibility depends on providing structured, data-driven, and actionable advice.
"#
    )
}

fn string(description: &str) -> Value {
    json!({ "type": "STRING", "description": description })
}

fn level() -> Value {
    json!({ "type": "STRING", "enum": ["Low", "Medium", "High"] })
}

/// Server-side schema for compliance analysis output.
#[must_use]
pub fn analysis_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "complianceStatus": {
                "type": "STRING",
                "enum": ["COMPLIANT", "NON_COMPLIANT", "NEEDS_REVIEW"],
                "description": "The overall compliance status. If any regulation is NON_COMPLIANT, this should be NON_COMPLIANT."
            },
            "summary": string("A brief, one to two sentence summary of the overall analysis across all selected regulations."),
            "issues": {
                "type": "ARRAY",
                "description": "A list of identified compliance issues. This should be an empty array if there are no issues.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "clause": string("The specific clause or part of the policy text that has an issue. If not applicable, state \"General Policy\"."),
                        "issueDescription": string("A detailed explanation of why this is a compliance issue."),
                        "severity": {
                            "type": "STRING",
                            "enum": ["High", "Medium", "Low"],
                            "description": "The severity level of the issue."
                        },
                        "recommendation": string("A specific, actionable recommendation to fix the issue."),
                        "regulationId": string("The ID of the regulation this issue pertains to (e.g., \"gdpr\", \"ccpa_cpra\"). This is mandatory."),
                        "regulationLink": string("An authoritative URL pointing to the specific article or section of the regulation that is being violated. Be as specific as possible."),
                        "recommendationExample": {
                            "type": "OBJECT",
                            "description": "A concrete example showing how to apply the recommendation.",
                            "properties": {
                                "before": string("A short snippet of the original text that is problematic."),
                                "after": string("A short snippet showing the text after applying the recommendation.")
                            },
                            "required": ["before", "after"]
                        },
                        "riskAnalysis": string("A strategic analysis of the legal, operational, and compliance risks this issue poses to the organization."),
                        "mitigation": string("A concise, strategic plan to mitigate the identified risks, beyond just the textual recommendation.")
                    },
                    "required": [
                        "clause", "issueDescription", "severity", "recommendation", "regulationId",
                        "regulationLink", "recommendationExample", "riskAnalysis", "mitigation"
                    ]
                }
            }
        },
        "required": ["complianceStatus", "summary", "issues"]
    })
}

/// Server-side schema for scenario output.
#[must_use]
pub fn scenario_response_schema() -> Value {
    json!({
        "type": "OBJECT",
        "properties": {
            "riskMatrix": {
                "type": "ARRAY",
                "description": "A risk matrix identifying potential challenges.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "challenge": string("A concise description of the potential challenge."),
                        "description": string("A detailed explanation of the challenge, weaving in relevant legal precedents or context."),
                        "likelihood": level(),
                        "impact": level()
                    },
                    "required": ["challenge", "description", "likelihood", "impact"]
                }
            },
            "outcomes": {
                "type": "ARRAY",
                "description": "A set of three potential outcomes: Best Case, Most Likely, and Worst Case.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "title": { "type": "STRING", "enum": ["Best Case", "Most Likely", "Worst Case"] },
                        "description": string("A narrative description of this potential outcome.")
                    },
                    "required": ["title", "description"]
                }
            },
            "recommendations": {
                "type": "ARRAY",
                "description": "A list of actionable, strategic recommendations.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "recommendation": string("The specific recommendation."),
                        "rationale": string("The strategic reasoning behind the recommendation."),
                        "estimatedStaffing": string("Tangible estimate of staffing needs (e.g., '2 FTEs')."),
                        "estimatedBudget": string("A budget range for implementation (e.g., '$5k - $10k')."),
                        "estimatedTimeline": string("An estimated timeline (e.g., '3-6 weeks').")
                    },
                    "required": [
                        "recommendation", "rationale", "estimatedStaffing", "estimatedBudget", "estimatedTimeline"
                    ]
                }
            },
            "opportunities": {
                "type": "ARRAY",
                "description": "A list of strategic opportunities that may arise from the situation.",
                "items": {
                    "type": "OBJECT",
                    "properties": {
                        "opportunity": string("The name of the opportunity."),
                        "rationale": string("The strategic reasoning for this opportunity.")
                    },
                    "required": ["opportunity", "rationale"]
                }
            }
        },
        "required": ["riskMatrix", "outcomes", "recommendations", "opportunities"]
    })
}
