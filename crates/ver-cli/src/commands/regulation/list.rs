use serde::Serialize;
use ver_core::catalog;
use ver_core::entities::Regulation;
use ver_core::responses::RegulationGroup;

use crate::cli::GlobalFlags;
use crate::output::output;

#[derive(Debug, Serialize)]
struct RegulationListResponse<'a> {
    regulations: Vec<&'a Regulation>,
}

#[derive(Debug, Serialize)]
struct RegulationGroupsResponse {
    groups: Vec<RegulationGroup>,
}

pub fn run(search: Option<&str>, grouped: bool, flags: &GlobalFlags) -> anyhow::Result<()> {
    let regulations = select(search);
    if grouped {
        output(
            &RegulationGroupsResponse {
                groups: groups(&regulations),
            },
            flags.format,
        )
    } else {
        output(&RegulationListResponse { regulations }, flags.format)
    }
}

fn select(search: Option<&str>) -> Vec<&'static Regulation> {
    match search.map(str::trim).filter(|term| !term.is_empty()) {
        Some(term) => catalog::search(term),
        None => catalog::list().iter().collect(),
    }
}

fn groups(regulations: &[&Regulation]) -> Vec<RegulationGroup> {
    catalog::group_by_region(regulations)
        .into_iter()
        .map(|(region, members)| RegulationGroup {
            region,
            regulations: members.into_iter().cloned().collect(),
        })
        .collect()
}
