use crate::models::Hospital;
use std::cmp::Ordering;
use unicode_normalization::UnicodeNormalization;

/// Sort hospitals by name using `compare_locale`
pub fn sort_by_name(hospitals: &mut [Hospital]) {
    hospitals.sort_by(|a, b| compare_locale(&a.name, &b.name));
}

/// Locale-aware ordering for display labels.
/// Primary key is the normalized form; ties fall back to the raw strings.
pub fn compare_locale(a: &str, b: &str) -> Ordering {
    let a_key = normalize_for_sorting(a);
    let b_key = normalize_for_sorting(b);

    match a_key.cmp(&b_key) {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}

/// Normalize string for sorting
/// - Unicode NFD decomposition then lowercase (Hangul syllables become
///   conjoining jamo, which order like the Korean dictionary)
/// - Remove leading/trailing whitespace and collapse internal whitespace
pub fn normalize_for_sorting(s: &str) -> String {
    let normalized: String = s.nfd().collect::<String>().to_lowercase();
    normalized.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::hospital;

    #[test]
    fn test_hangul_dictionary_order() {
        let mut regions = vec!["서울특별시", "경기도", "부산광역시", "강원도", "대구광역시"];
        regions.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(
            regions,
            vec!["강원도", "경기도", "대구광역시", "부산광역시", "서울특별시"]
        );
    }

    #[test]
    fn test_shorter_syllable_sorts_first() {
        // 가나 precedes 각 in dictionary order
        assert_eq!(compare_locale("가나", "각"), Ordering::Less);
    }

    #[test]
    fn test_case_and_whitespace_ignored_with_raw_tiebreak() {
        assert_eq!(compare_locale("busan", "Seoul"), Ordering::Less);
        assert_eq!(normalize_for_sorting("  Seoul   Metro "), "seoul metro");
        assert_ne!(compare_locale("Seoul", "seoul"), Ordering::Equal);
    }

    #[test]
    fn test_accented_latin_sorts_with_base_letter() {
        let mut names = vec!["Zurich", "Élan", "Eagle"];
        names.sort_by(|a, b| compare_locale(a, b));
        assert_eq!(names, vec!["Eagle", "Élan", "Zurich"]);
    }

    #[test]
    fn test_sort_by_name() {
        let mut hospitals = vec![
            hospital("세브란스 어린이병원", "서울특별시", &[], &[]),
            hospital("삼성서울병원 어린이병원", "서울특별시", &[], &[]),
            hospital("강남 아동병원", "서울특별시", &[], &[]),
        ];
        sort_by_name(&mut hospitals);
        let names: Vec<_> = hospitals.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["강남 아동병원", "삼성서울병원 어린이병원", "세브란스 어린이병원"]
        );
    }
}
