use crate::models::Hospital;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

/// The two filterable categories of a hospital
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FacetKind {
    Specialty,
    Resource,
}

impl FacetKind {
    pub fn name(&self) -> &'static str {
        match self {
            FacetKind::Specialty => "specialty",
            FacetKind::Resource => "resource",
        }
    }

    /// The hospital's values for this category
    pub fn values_of<'a>(&self, hospital: &'a Hospital) -> &'a [String] {
        match self {
            FacetKind::Specialty => &hospital.specialties,
            FacetKind::Resource => &hospital.resources,
        }
    }
}

impl fmt::Display for FacetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FacetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "specialty" | "specialties" | "진료과목" => Ok(FacetKind::Specialty),
            "resource" | "resources" | "의료자원" => Ok(FacetKind::Resource),
            other => Err(other.to_string()),
        }
    }
}

/// Every distinct facet value observed in a dataset, in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetUniverse {
    pub specialties: Vec<String>,
    pub resources: Vec<String>,
}

impl FacetUniverse {
    pub fn values(&self, kind: FacetKind) -> &[String] {
        match kind {
            FacetKind::Specialty => &self.specialties,
            FacetKind::Resource => &self.resources,
        }
    }
}

/// Collect the distinct specialties and resources across all hospitals.
/// A hospital without resources contributes nothing to that universe.
pub fn extract_facets(hospitals: &[Hospital]) -> FacetUniverse {
    FacetUniverse {
        specialties: distinct_values(hospitals, FacetKind::Specialty),
        resources: distinct_values(hospitals, FacetKind::Resource),
    }
}

fn distinct_values(hospitals: &[Hospital], kind: FacetKind) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut values = Vec::new();

    for hospital in hospitals {
        for value in kind.values_of(hospital) {
            if seen.insert(value.as_str()) {
                values.push(value.clone());
            }
        }
    }

    values
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hospital;

    #[test]
    fn test_extract_distinct_in_first_seen_order() {
        let hospitals = vec![
            hospital("A", "Seoul", &["내과", "피부과"], &["X-RAY"]),
            hospital("B", "Seoul", &["피부과", "안과"], &[]),
            hospital("C", "Busan", &["내과"], &["입원실", "X-RAY"]),
        ];

        let facets = extract_facets(&hospitals);
        assert_eq!(facets.specialties, vec!["내과", "피부과", "안과"]);
        assert_eq!(facets.resources, vec!["X-RAY", "입원실"]);
    }

    #[test]
    fn test_hospitals_without_resources_ignored() {
        let with = vec![hospital("A", "Seoul", &["내과"], &["CT"])];
        let mut without = with.clone();
        without.push(hospital("B", "Seoul", &["내과"], &[]));

        assert_eq!(extract_facets(&with), extract_facets(&without));
    }

    #[test]
    fn test_exact_equality_no_case_folding() {
        let hospitals = vec![
            hospital("A", "Seoul", &[], &["X-RAY"]),
            hospital("B", "Seoul", &[], &["x-ray"]),
        ];
        assert_eq!(extract_facets(&hospitals).resources.len(), 2);
    }

    #[test]
    fn test_empty_dataset() {
        let facets = extract_facets(&[]);
        assert!(facets.specialties.is_empty());
        assert!(facets.resources.is_empty());
    }

    #[test]
    fn test_kind_parsing() {
        assert_eq!("Specialty".parse::<FacetKind>(), Ok(FacetKind::Specialty));
        assert_eq!("의료자원".parse::<FacetKind>(), Ok(FacetKind::Resource));
        assert!("region".parse::<FacetKind>().is_err());
    }
}
