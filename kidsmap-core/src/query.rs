//! Filter-then-group pipeline shared by the map and list presentations.

use crate::facets::{extract_facets, FacetUniverse};
use crate::filtering::{apply_filters, FilterState};
use crate::grouping::{group_by_region, RegionGroup};
use crate::models::Hospital;
use crate::sorting::sort_by_name;
use serde::Serialize;
use tracing::debug;

/// Output consumed by both presentations
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QueryResult {
    pub filtered: Vec<Hospital>,
    pub grouped_by_region: Vec<RegionGroup>,
}

impl QueryResult {
    pub fn len(&self) -> usize {
        self.filtered.len()
    }

    /// Zero matches is a valid result, not an error
    pub fn is_empty(&self) -> bool {
        self.filtered.is_empty()
    }

    pub fn group(&self, region: &str) -> Option<&RegionGroup> {
        self.grouped_by_region.iter().find(|g| g.region == region)
    }

    /// Reorder by name, then regroup so each group follows the new order
    pub fn sort_by_name(&mut self) {
        sort_by_name(&mut self.filtered);
        self.grouped_by_region = group_by_region(&self.filtered);
    }
}

/// Read-only view over a loaded dataset
#[derive(Debug, Clone)]
pub struct HospitalQueryEngine<'a> {
    hospitals: &'a [Hospital],
    facets: FacetUniverse,
}

impl<'a> HospitalQueryEngine<'a> {
    pub fn new(hospitals: &'a [Hospital]) -> Self {
        Self {
            hospitals,
            facets: extract_facets(hospitals),
        }
    }

    pub fn hospitals(&self) -> &'a [Hospital] {
        self.hospitals
    }

    pub fn facets(&self) -> &FacetUniverse {
        &self.facets
    }

    /// A fresh all-unselected state for this dataset
    pub fn initial_state(&self) -> FilterState {
        FilterState::from_facets(&self.facets)
    }

    /// Recompute the filtered and grouped view for the given state
    pub fn query(&self, state: &FilterState) -> QueryResult {
        let filtered = apply_filters(self.hospitals, state);
        let grouped_by_region = group_by_region(&filtered);

        debug!(
            total = self.hospitals.len(),
            matched = filtered.len(),
            groups = grouped_by_region.len(),
            "Query evaluated"
        );

        QueryResult {
            filtered,
            grouped_by_region,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facets::FacetKind;
    use crate::test_support::{hospital, sample_hospitals};

    fn names(hospitals: &[Hospital]) -> Vec<&str> {
        hospitals.iter().map(|h| h.name.as_str()).collect()
    }

    fn varied_hospitals() -> Vec<Hospital> {
        vec![
            hospital("Alpha Kids", "Seoul", &["내과", "피부과"], &["X-RAY", "CT"]),
            hospital("Bravo", "Busan", &["내과"], &["X-RAY"]),
            hospital("Charlie", "Seoul", &["피부과", "안과"], &[]),
            hospital("delta clinic", "Daegu", &["안과"], &["CT"]),
            hospital("Echo Hospital", "Busan", &[], &["입원실"]),
        ]
    }

    #[test]
    fn test_example_specialty_filter_grouped() {
        let hospitals = sample_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);
        let mut state = engine.initial_state();
        state.specialty_filters.set("내과", true).unwrap();

        let result = engine.query(&state);
        assert_eq!(names(&result.filtered), vec!["A", "C"]);
        assert_eq!(result.grouped_by_region.len(), 2);
        assert_eq!(names(&result.group("Seoul").unwrap().hospitals), vec!["A"]);
        assert_eq!(names(&result.group("Busan").unwrap().hospitals), vec!["C"]);
    }

    #[test]
    fn test_example_search_without_facets() {
        let hospitals = varied_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);
        let mut state = engine.initial_state();
        state.search_term = "a".to_string();

        let result = engine.query(&state);
        assert_eq!(
            names(&result.filtered),
            vec!["Alpha Kids", "Bravo", "Charlie", "delta clinic", "Echo Hospital"]
        );

        state.search_term = "CLINIC".to_string();
        assert_eq!(names(&engine.query(&state).filtered), vec!["delta clinic"]);
    }

    #[test]
    fn test_example_absent_resources_excluded() {
        let hospitals = varied_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);
        let mut state = engine.initial_state();
        state.resource_filters.set("X-RAY", true).unwrap();

        let result = engine.query(&state);
        assert!(!names(&result.filtered).contains(&"Charlie"));
        assert_eq!(names(&result.filtered), vec!["Alpha Kids", "Bravo"]);
    }

    #[test]
    fn test_identity_without_filters() {
        let hospitals = varied_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);

        let result = engine.query(&engine.initial_state());
        assert_eq!(result.filtered, hospitals);
    }

    #[test]
    fn test_idempotent() {
        let hospitals = varied_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);
        let mut state = engine.initial_state();
        state.search_term = "o".to_string();
        state.resource_filters.set("CT", true).unwrap();

        assert_eq!(engine.query(&state), engine.query(&state));
    }

    #[test]
    fn test_selecting_more_facets_never_grows_result() {
        let hospitals = varied_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);

        for kind in [FacetKind::Specialty, FacetKind::Resource] {
            let mut state = engine.initial_state();
            let mut previous = engine.query(&state).len();

            for value in engine.facets().values(kind).to_vec() {
                state.selection_mut(kind).set(&value, true).unwrap();
                let current = engine.query(&state).len();
                assert!(current <= previous, "{} {} grew the result", kind, value);
                previous = current;
            }
        }
    }

    #[test]
    fn test_grouping_is_complete_partition() {
        let hospitals = varied_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);
        let mut state = engine.initial_state();
        state.specialty_filters.set("안과", true).unwrap();

        let result = engine.query(&state);
        let mut regrouped: Vec<&Hospital> = result
            .grouped_by_region
            .iter()
            .flat_map(|g| g.hospitals.iter())
            .collect();
        regrouped.sort_by(|a, b| a.name.cmp(&b.name));
        let mut filtered: Vec<&Hospital> = result.filtered.iter().collect();
        filtered.sort_by(|a, b| a.name.cmp(&b.name));

        assert_eq!(regrouped, filtered);
        for group in &result.grouped_by_region {
            assert!(group.hospitals.iter().all(|h| h.region == group.region));
        }
    }

    #[test]
    fn test_sort_by_name_regroups() {
        let hospitals = vec![
            hospital("Zulu", "Seoul", &[], &[]),
            hospital("Bravo", "Busan", &[], &[]),
            hospital("alpha", "Seoul", &[], &[]),
        ];
        let engine = HospitalQueryEngine::new(&hospitals);
        let mut result = engine.query(&engine.initial_state());
        result.sort_by_name();

        assert_eq!(names(&result.filtered), vec!["alpha", "Bravo", "Zulu"]);
        assert_eq!(names(&result.group("Seoul").unwrap().hospitals), vec!["alpha", "Zulu"]);
    }

    #[test]
    fn test_serialized_shape() {
        let hospitals = sample_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);
        let value = serde_json::to_value(engine.query(&engine.initial_state())).unwrap();

        assert_eq!(value["filtered"].as_array().unwrap().len(), 3);
        assert_eq!(value["groupedByRegion"][0]["region"], "Busan");
        assert_eq!(value["groupedByRegion"][1]["hospitals"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_empty_result_is_valid() {
        let hospitals = varied_hospitals();
        let engine = HospitalQueryEngine::new(&hospitals);
        let mut state = engine.initial_state();
        state.search_term = "no such hospital".to_string();

        let result = engine.query(&state);
        assert!(result.is_empty());
        assert!(result.grouped_by_region.is_empty());
    }
}
