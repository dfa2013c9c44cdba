use crate::models::Hospital;
use crate::sorting::compare_locale;
use serde::Serialize;
use std::collections::HashMap;

/// Hospitals of one region, in the order they were filtered
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegionGroup {
    pub region: String,
    pub hospitals: Vec<Hospital>,
}

/// Group hospitals by region
/// Every hospital lands in exactly one group; groups are sorted by region
/// name with `compare_locale` and keep the input order internally
pub fn group_by_region(hospitals: &[Hospital]) -> Vec<RegionGroup> {
    let mut groups: HashMap<&str, Vec<Hospital>> = HashMap::new();

    for hospital in hospitals {
        groups
            .entry(hospital.region.as_str())
            .or_default()
            .push(hospital.clone());
    }

    let mut grouped: Vec<RegionGroup> = groups
        .into_iter()
        .map(|(region, hospitals)| RegionGroup {
            region: region.to_string(),
            hospitals,
        })
        .collect();
    grouped.sort_by(|a, b| compare_locale(&a.region, &b.region));
    grouped
}

/// Get sorted group names from grouped hospitals
pub fn get_sorted_group_names(groups: &[RegionGroup]) -> Vec<&str> {
    groups.iter().map(|g| g.region.as_str()).collect()
}
