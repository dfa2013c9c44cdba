use kidsmap_core::*;
use std::path::{Path, PathBuf};

use crate::cli::SortField;

/// Where the loaded hospitals came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Embedded,
    File(PathBuf),
}

/// Application state management - Domain state only
/// This struct contains the dataset and the session's filter state
#[derive(Debug)]
pub struct AppState {
    /// Normalized hospitals, immutable after load
    pub hospitals: Vec<Hospital>,
    /// Data-quality defects found while loading
    pub defects: Vec<DataDefect>,
    /// Dataset origin
    pub source: DataSource,
    /// Facet universes derived at load time
    pub facets: FacetUniverse,
    /// Active filters
    pub filters: FilterState,
    /// Active sort
    pub sort_by: Option<SortField>,
}

impl AppState {
    /// Build state from an ingested dataset; all filters start cleared
    pub fn from_dataset(dataset: Dataset, source: DataSource) -> Self {
        let facets = extract_facets(&dataset.hospitals);
        let filters = FilterState::from_facets(&facets);

        Self {
            hospitals: dataset.hospitals,
            defects: dataset.defects,
            source,
            facets,
            filters,
            sort_by: None,
        }
    }

    /// Load a dataset file, or the bundled dataset when no path is given
    pub fn load(path: Option<&Path>) -> Result<Self, LoadError> {
        match path {
            Some(path) => {
                let dataset = load_hospitals(path)?;
                Ok(Self::from_dataset(dataset, DataSource::File(path.to_path_buf())))
            }
            None => Ok(Self::from_dataset(load_embedded()?, DataSource::Embedded)),
        }
    }

    pub fn engine(&self) -> HospitalQueryEngine<'_> {
        HospitalQueryEngine::new(&self.hospitals)
    }

    /// Evaluate the current filters (and sort, if any)
    pub fn query(&self) -> QueryResult {
        let mut result = self.engine().query(&self.filters);
        if self.sort_by == Some(SortField::Name) {
            result.sort_by_name();
        }
        result
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filters.search_term = term.into();
    }

    /// Mark a facet value as selected
    pub fn select_facet(&mut self, kind: FacetKind, value: &str) -> Result<(), FilterError> {
        self.filters.selection_mut(kind).set(value, true)
    }

    /// Exact name match first, otherwise a unique case-insensitive partial match
    pub fn find_hospital(&self, name: &str) -> Option<&Hospital> {
        if let Some(exact) = self.hospitals.iter().find(|h| h.name == name) {
            return Some(exact);
        }

        let mut partial = self.hospitals.iter().filter(|h| matches_search(h, name));
        match (partial.next(), partial.next()) {
            (Some(only), None) => Some(only),
            _ => None,
        }
    }

    /// Human-readable dataset origin
    pub fn source_label(&self) -> String {
        match &self.source {
            DataSource::Embedded => "bundled dataset".to_string(),
            DataSource::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_state() -> AppState {
        let document = json!([
            {
                "name": "세브란스 어린이병원",
                "position": [37.5622, 126.9410],
                "address": "서울특별시 서대문구 연세로 50-1",
                "hours": "24/7",
                "진료과목": ["내과", "이비인후과"],
                "의료자원": ["입원실"]
            },
            {
                "name": "삼성서울병원 어린이병원",
                "position": [37.4881, 127.0856],
                "address": "서울특별시 강남구 일원로 81",
                "hours": "24/7",
                "진료과목": ["내과", "피부과"],
                "의료자원": ["X-RAY"]
            },
            {
                "name": "부산 아이병원",
                "position": [35.1796, 129.0756],
                "address": "부산광역시 해운대구",
                "진료과목": ["소아청소년과"]
            }
        ]);
        AppState::from_dataset(ingest_document(&document).unwrap(), DataSource::Embedded)
    }

    #[test]
    fn test_loaded_state_starts_unfiltered() {
        let state = sample_state();
        assert_eq!(state.facets.specialties, vec!["내과", "이비인후과", "피부과", "소아청소년과"]);
        assert_eq!(state.facets.resources, vec!["입원실", "X-RAY"]);
        assert_eq!(state.query().len(), 3);
    }

    #[test]
    fn test_select_and_clear() {
        let mut state = sample_state();
        state.select_facet(FacetKind::Resource, "X-RAY").unwrap();

        let result = state.query();
        assert_eq!(result.len(), 1);
        assert_eq!(result.filtered[0].name, "삼성서울병원 어린이병원");

        state.set_search("세브란스");
        assert!(state.query().is_empty());

        state.filters.reset();
        assert_eq!(state.query().len(), 3);
    }

    #[test]
    fn test_select_unknown_facet_errors() {
        let mut state = sample_state();
        assert!(state.select_facet(FacetKind::Specialty, "치과").is_err());
        assert!(!state.filters.specialty_filters.any_selected());
    }

    #[test]
    fn test_query_groups_by_region() {
        let state = sample_state();
        let result = state.query();
        assert_eq!(
            get_sorted_group_names(&result.grouped_by_region),
            vec!["부산광역시", "서울특별시"]
        );
    }

    #[test]
    fn test_sorted_query() {
        let mut state = sample_state();
        state.sort_by = Some(SortField::Name);
        let result = state.query();
        let seoul = result.group("서울특별시").unwrap();
        assert_eq!(seoul.hospitals[0].name, "삼성서울병원 어린이병원");
    }

    #[test]
    fn test_find_hospital() {
        let state = sample_state();
        assert!(state.find_hospital("세브란스 어린이병원").is_some());
        assert_eq!(
            state.find_hospital("세브란스").map(|h| h.name.as_str()),
            Some("세브란스 어린이병원")
        );
        // "어린이병원" matches two hospitals
        assert!(state.find_hospital("어린이병원").is_none());
    }

    #[test]
    fn test_load_embedded() {
        let state = AppState::load(None).unwrap();
        assert_eq!(state.source, DataSource::Embedded);
        assert!(!state.hospitals.is_empty());
        assert_eq!(state.source_label(), "bundled dataset");
    }
}
