use crate::models::Hospital;
use std::collections::HashSet;

/// Dataset-level consistency checks on already-normalized hospitals
/// Returns Ok(()) if clean, or Err(Vec<String>) with one warning per issue
pub fn validate_dataset(hospitals: &[Hospital]) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();
    let mut names = HashSet::new();

    for (idx, hospital) in hospitals.iter().enumerate() {
        let hospital_ref = format!("Hospital #{} ('{}')", idx + 1, hospital.name);

        if !names.insert(hospital.name.as_str()) {
            errors.push(format!("{}: duplicate hospital name", hospital_ref));
        }

        if hospital.region.trim().is_empty() {
            errors.push(format!("{}: region cannot be empty", hospital_ref));
        }

        if hospital.specialties.is_empty() {
            errors.push(format!("{}: declares no specialties", hospital_ref));
        }

        if !hospital.position.is_valid() {
            errors.push(format!(
                "{}: position {} is out of range",
                hospital_ref, hospital.position
            ));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::load_embedded;
    use crate::test_support::hospital;

    #[test]
    fn test_embedded_dataset_validates() {
        let dataset = load_embedded().unwrap();
        assert!(validate_dataset(&dataset.hospitals).is_ok());
    }

    #[test]
    fn test_reports_each_issue() {
        let mut blank_region = hospital("B", "Seoul", &["내과"], &[]);
        blank_region.region = " ".to_string();

        let hospitals = vec![
            hospital("A", "Seoul", &["내과"], &[]),
            hospital("A", "Busan", &["내과"], &[]),
            blank_region,
            hospital("C", "Seoul", &[], &["CT"]),
        ];

        let errors = validate_dataset(&hospitals).unwrap_err();
        assert_eq!(errors.len(), 3);
        assert!(errors[0].contains("duplicate"));
        assert!(errors[1].contains("region"));
        assert!(errors[2].contains("no specialties"));
    }
}
