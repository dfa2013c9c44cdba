use crate::error::FilterError;
use crate::facets::{FacetKind, FacetUniverse};
use crate::models::Hospital;
use std::collections::HashMap;

/// Selected/unselected flag for every facet value of one category.
/// The key set is fixed at construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetSelection {
    kind: Option<FacetKind>,
    flags: Vec<(String, bool)>,
}

impl FacetSelection {
    /// All values start unselected
    pub fn new(kind: FacetKind, values: &[String]) -> Self {
        Self {
            kind: Some(kind),
            flags: values.iter().map(|v| (v.clone(), false)).collect(),
        }
    }

    /// Flip a value and return its new state
    pub fn toggle(&mut self, value: &str) -> Result<bool, FilterError> {
        let flag = self.flag_mut(value)?;
        *flag = !*flag;
        Ok(*flag)
    }

    pub fn set(&mut self, value: &str, selected: bool) -> Result<(), FilterError> {
        *self.flag_mut(value)? = selected;
        Ok(())
    }

    pub fn is_selected(&self, value: &str) -> bool {
        self.flags.iter().any(|(v, selected)| *selected && v == value)
    }

    pub fn selected(&self) -> impl Iterator<Item = &str> {
        self.flags
            .iter()
            .filter(|(_, selected)| *selected)
            .map(|(v, _)| v.as_str())
    }

    pub fn any_selected(&self) -> bool {
        self.flags.iter().any(|(_, selected)| *selected)
    }

    pub fn clear(&mut self) {
        for (_, selected) in &mut self.flags {
            *selected = false;
        }
    }

    /// Facet values with their flags, in universe order
    pub fn entries(&self) -> impl Iterator<Item = (&str, bool)> {
        self.flags.iter().map(|(v, selected)| (v.as_str(), *selected))
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    fn flag_mut(&mut self, value: &str) -> Result<&mut bool, FilterError> {
        let kind = self.kind.map(|k| k.name()).unwrap_or("facet");
        self.flags
            .iter_mut()
            .find(|(v, _)| v == value)
            .map(|(_, selected)| selected)
            .ok_or_else(|| FilterError::UnknownFacet {
                kind: kind.to_string(),
                value: value.to_string(),
            })
    }
}

/// User-controlled query state for one session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    pub search_term: String,
    pub specialty_filters: FacetSelection,
    pub resource_filters: FacetSelection,
}

impl FilterState {
    /// Empty search and every facet unselected
    pub fn from_facets(facets: &FacetUniverse) -> Self {
        Self {
            search_term: String::new(),
            specialty_filters: FacetSelection::new(FacetKind::Specialty, &facets.specialties),
            resource_filters: FacetSelection::new(FacetKind::Resource, &facets.resources),
        }
    }

    pub fn selection(&self, kind: FacetKind) -> &FacetSelection {
        match kind {
            FacetKind::Specialty => &self.specialty_filters,
            FacetKind::Resource => &self.resource_filters,
        }
    }

    pub fn selection_mut(&mut self, kind: FacetKind) -> &mut FacetSelection {
        match kind {
            FacetKind::Specialty => &mut self.specialty_filters,
            FacetKind::Resource => &mut self.resource_filters,
        }
    }

    /// Back to an empty search with nothing selected; keys are kept
    pub fn reset(&mut self) {
        self.search_term.clear();
        self.specialty_filters.clear();
        self.resource_filters.clear();
    }
}

/// Parse facet filter strings in the format "kind=value" into a filter map
/// Multiple values for the same kind are collected into a vector
pub fn parse_facet_filters(
    facet_strings: &[String],
) -> Result<HashMap<FacetKind, Vec<String>>, FilterError> {
    let mut facet_map: HashMap<FacetKind, Vec<String>> = HashMap::new();

    for facet_str in facet_strings {
        let (kind, value) = facet_str
            .split_once('=')
            .ok_or_else(|| FilterError::InvalidFormat(facet_str.clone()))?;
        let kind: FacetKind = kind.parse().map_err(FilterError::UnknownKind)?;

        facet_map
            .entry(kind)
            .or_default()
            .push(value.trim().to_string());
    }

    Ok(facet_map)
}

/// Apply filters to a list of hospitals, returning only those that match
pub fn apply_filters(hospitals: &[Hospital], filters: &FilterState) -> Vec<Hospital> {
    hospitals
        .iter()
        .filter(|hospital| matches_filters(hospital, filters))
        .cloned()
        .collect()
}

/// Check if a hospital matches the given filters
/// AND logic everywhere: name, every selected specialty, every selected resource
pub fn matches_filters(hospital: &Hospital, filters: &FilterState) -> bool {
    matches_search(hospital, &filters.search_term)
        && filters
            .specialty_filters
            .selected()
            .all(|value| hospital.has_specialty(value))
        && filters
            .resource_filters
            .selected()
            .all(|value| hospital.has_resource(value))
}

/// Case-insensitive substring match on the name; empty term matches all
pub fn matches_search(hospital: &Hospital, term: &str) -> bool {
    term.is_empty() || hospital.name.to_lowercase().contains(&term.to_lowercase())
}

/// Check if any filter is active
pub fn has_filters(filters: &FilterState) -> bool {
    !filters.search_term.is_empty()
        || filters.specialty_filters.any_selected()
        || filters.resource_filters.any_selected()
}
