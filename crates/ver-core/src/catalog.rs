//! Static regulation catalog.
//!
//! The catalog is built once on first access and never mutated. Grouping and
//! search are derived views recomputed from [`list`] on every call.

use std::sync::OnceLock;

use crate::entities::Regulation;

/// Group label for regulations without a region.
pub const UNGROUPED_REGION: &str = "Other";

struct RegulationDef {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    source_url: Option<&'static str>,
    region: Option<&'static str>,
}

const DEFINITIONS: &[RegulationDef] = &[
    RegulationDef {
        id: "gdpr",
        name: "GDPR",
        description: "General Data Protection Regulation. Governs the processing of personal data of individuals in the EU, including lawful basis, data minimisation, storage limitation, and data subject rights.",
        source_url: Some("https://eur-lex.europa.eu/eli/reg/2016/679/oj"),
        region: Some("European Union"),
    },
    RegulationDef {
        id: "eu_ai_act",
        name: "EU AI Act",
        description: "Risk-based framework for artificial intelligence systems placed on the EU market, with obligations for high-risk systems, transparency duties, and prohibited practices.",
        source_url: Some("https://eur-lex.europa.eu/eli/reg/2024/1689/oj"),
        region: Some("European Union"),
    },
    RegulationDef {
        id: "nis2",
        name: "NIS2 Directive",
        description: "Cybersecurity risk-management and incident-reporting obligations for essential and important entities across the EU.",
        source_url: Some("https://eur-lex.europa.eu/eli/dir/2022/2555/oj"),
        region: Some("European Union"),
    },
    RegulationDef {
        id: "dora",
        name: "DORA",
        description: "Digital Operational Resilience Act. ICT risk management, incident reporting, resilience testing, and third-party risk requirements for EU financial entities.",
        source_url: Some("https://eur-lex.europa.eu/eli/reg/2022/2554/oj"),
        region: Some("European Union"),
    },
    RegulationDef {
        id: "ccpa_cpra",
        name: "CCPA / CPRA",
        description: "California Consumer Privacy Act as amended by the California Privacy Rights Act. Rights to know, delete, correct, and opt out of the sale or sharing of personal information.",
        source_url: Some("https://oag.ca.gov/privacy/ccpa"),
        region: Some("United States"),
    },
    RegulationDef {
        id: "hipaa",
        name: "HIPAA",
        description: "Health Insurance Portability and Accountability Act. Privacy, Security, and Breach Notification Rules for protected health information.",
        source_url: Some("https://www.hhs.gov/hipaa/index.html"),
        region: Some("United States"),
    },
    RegulationDef {
        id: "sox",
        name: "Sarbanes-Oxley Act",
        description: "Financial reporting and internal control requirements for US public companies, including record retention and auditor independence.",
        source_url: Some("https://www.sec.gov/spotlight/sarbanes-oxley.htm"),
        region: Some("United States"),
    },
    RegulationDef {
        id: "glba",
        name: "GLBA",
        description: "Gramm-Leach-Bliley Act. Financial privacy notices and the Safeguards Rule for customer information held by financial institutions.",
        source_url: Some("https://www.ftc.gov/business-guidance/privacy-security/gramm-leach-bliley-act"),
        region: Some("United States"),
    },
    RegulationDef {
        id: "ferpa",
        name: "FERPA",
        description: "Family Educational Rights and Privacy Act. Protects the privacy of student education records.",
        source_url: Some("https://studentprivacy.ed.gov/ferpa"),
        region: Some("United States"),
    },
    RegulationDef {
        id: "coppa",
        name: "COPPA",
        description: "Children's Online Privacy Protection Act. Parental consent and data handling requirements for online services directed at children under 13.",
        source_url: Some("https://www.ftc.gov/legal-library/browse/rules/childrens-online-privacy-protection-rule-coppa"),
        region: Some("United States"),
    },
    RegulationDef {
        id: "pipeda",
        name: "PIPEDA",
        description: "Personal Information Protection and Electronic Documents Act. Canada's federal private-sector privacy law built on ten fair information principles.",
        source_url: Some("https://www.priv.gc.ca/en/privacy-topics/privacy-laws-in-canada/the-personal-information-protection-and-electronic-documents-act-pipeda/"),
        region: Some("Canada"),
    },
    RegulationDef {
        id: "lgpd",
        name: "LGPD",
        description: "Lei Geral de Proteção de Dados. Brazil's general data protection law covering legal bases, data subject rights, and the national data protection authority.",
        source_url: Some("https://www.planalto.gov.br/ccivil_03/_ato2015-2018/2018/lei/l13709.htm"),
        region: Some("Brazil"),
    },
    RegulationDef {
        id: "pdpa_sg",
        name: "PDPA (Singapore)",
        description: "Personal Data Protection Act 2012. Consent, purpose limitation, notification, and data breach notification obligations for organisations in Singapore.",
        source_url: Some("https://www.pdpc.gov.sg/overview-of-pdpa/the-legislation/personal-data-protection-act"),
        region: Some("Singapore"),
    },
    RegulationDef {
        id: "pci_dss",
        name: "PCI DSS",
        description: "Payment Card Industry Data Security Standard. Technical and operational requirements for entities that store, process, or transmit cardholder data.",
        source_url: Some("https://www.pcisecuritystandards.org/document_library/"),
        region: Some("Global"),
    },
    RegulationDef {
        id: "iso_27001",
        name: "ISO/IEC 27001",
        description: "International standard for information security management systems, including risk assessment and Annex A controls.",
        source_url: Some("https://www.iso.org/standard/27001"),
        region: Some("Global"),
    },
    RegulationDef {
        id: "nist_csf",
        name: "NIST Cybersecurity Framework 2.0",
        description: "Voluntary framework organised around the Govern, Identify, Protect, Detect, Respond, and Recover functions for managing cybersecurity risk.",
        source_url: Some("https://www.nist.gov/cyberframework"),
        region: None,
    },
];

static CATALOG: OnceLock<Vec<Regulation>> = OnceLock::new();

/// All known regulations in catalog order.
#[must_use]
pub fn list() -> &'static [Regulation] {
    CATALOG.get_or_init(|| {
        DEFINITIONS
            .iter()
            .map(|def| Regulation {
                id: def.id.to_string(),
                name: def.name.to_string(),
                description: def.description.to_string(),
                source_url: def.source_url.map(str::to_string),
                region: def.region.map(str::to_string),
            })
            .collect()
    })
}

/// Look up a regulation by id.
#[must_use]
pub fn find_by_id(id: &str) -> Option<&'static Regulation> {
    list().iter().find(|regulation| regulation.id == id)
}

/// Resolve ids to regulations in catalog order. Unknown ids are skipped.
#[must_use]
pub fn resolve<S: AsRef<str>>(ids: &[S]) -> Vec<&'static Regulation> {
    list()
        .iter()
        .filter(|regulation| ids.iter().any(|id| id.as_ref() == regulation.id))
        .collect()
}

/// Case-insensitive search over name and region. An empty term matches all.
#[must_use]
pub fn search(term: &str) -> Vec<&'static Regulation> {
    let needle = term.trim().to_lowercase();
    if needle.is_empty() {
        return list().iter().collect();
    }

    list()
        .iter()
        .filter(|regulation| {
            regulation.name.to_lowercase().contains(&needle)
                || regulation
                    .region
                    .as_deref()
                    .is_some_and(|region| region.to_lowercase().contains(&needle))
        })
        .collect()
}

/// Group regulations by region, keeping regions in first-seen order.
#[must_use]
pub fn group_by_region<'a>(
    regulations: &[&'a Regulation],
) -> Vec<(String, Vec<&'a Regulation>)> {
    let mut groups: Vec<(String, Vec<&'a Regulation>)> = Vec::new();
    for &regulation in regulations {
        let region = regulation.region.as_deref().unwrap_or(UNGROUPED_REGION);
        match groups.iter_mut().find(|(name, _)| name == region) {
            Some((_, members)) => members.push(regulation),
            None => groups.push((region.to_string(), vec![regulation])),
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<&str> = list().iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids.len(), list().len());
    }

    #[test]
    fn first_entry_is_gdpr() {
        assert_eq!(list()[0].id, "gdpr");
    }

    #[test]
    fn find_by_id_hits_and_misses() {
        assert_eq!(find_by_id("hipaa").unwrap().name, "HIPAA");
        assert!(find_by_id("not-a-regulation").is_none());
    }

    #[test]
    fn resolve_keeps_catalog_order_and_skips_unknown() {
        let resolved = resolve(&["hipaa", "bogus", "gdpr"]);
        let ids: Vec<&str> = resolved.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["gdpr", "hipaa"]);
    }

    #[test]
    fn resolve_empty_is_empty() {
        let none: [&str; 0] = [];
        assert!(resolve(&none).is_empty());
    }

    #[test]
    fn search_matches_name_and_region() {
        let by_name: Vec<&str> = search("hipaa").iter().map(|r| r.id.as_str()).collect();
        assert_eq!(by_name, vec!["hipaa"]);

        let by_region = search("canada");
        assert!(by_region.iter().all(|r| r.region.as_deref() == Some("Canada")));
        assert!(!by_region.is_empty());
    }

    #[test]
    fn blank_search_returns_everything() {
        assert_eq!(search("  ").len(), list().len());
    }

    #[test]
    fn grouping_preserves_first_seen_order() {
        let all: Vec<&Regulation> = list().iter().collect();
        let groups = group_by_region(&all);
        assert_eq!(groups[0].0, "European Union");
        assert!(groups.iter().any(|(region, _)| region == UNGROUPED_REGION));

        let total: usize = groups.iter().map(|(_, members)| members.len()).sum();
        assert_eq!(total, list().len());
    }
}
