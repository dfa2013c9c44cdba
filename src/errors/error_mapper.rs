use kidsmap_core::{FilterError, LoadError};
use std::io::ErrorKind;
use std::path::Path;

/// Map dataset loading errors to user-friendly messages
/// Returns (title, message, details)
pub fn map_load_error(error: &LoadError, path: Option<&Path>) -> (String, String, String) {
    let location = path
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "bundled dataset".to_string());

    match error {
        LoadError::Io(io) if io.kind() == ErrorKind::NotFound => (
            "File Not Found".to_string(),
            "The dataset file could not be found.".to_string(),
            format!(
                "Path: {}\n\nPlease verify the file exists or unset KIDSMAP_DATA to use the bundled dataset.",
                location
            ),
        ),
        LoadError::Io(io) if io.kind() == ErrorKind::PermissionDenied => (
            "Permission Denied".to_string(),
            "Permission denied.".to_string(),
            format!("You don't have permission to read this file:\n{}", location),
        ),
        LoadError::Io(io) => (
            "Error Loading File".to_string(),
            "Failed to read the dataset file.".to_string(),
            format!("{}: {}", location, io),
        ),
        LoadError::Json(json) => (
            "Invalid Dataset".to_string(),
            "The dataset is not valid JSON.".to_string(),
            format!("{} (line {}, column {})", location, json.line(), json.column()),
        ),
        LoadError::NotAList => (
            "Invalid Dataset".to_string(),
            "The dataset does not contain a list of hospitals.".to_string(),
            format!(
                "{}\n\nExpected a JSON array of hospital records or an object with a 'hospitals' array.",
                location
            ),
        ),
    }
}

/// Map a rejected filter selection to a one-line warning
pub fn map_filter_error(error: &FilterError) -> String {
    match error {
        FilterError::UnknownFacet { kind, value } => format!(
            "Ignoring {} '{}': no hospital in this dataset lists it (see --facets)",
            kind, value
        ),
        other => format!("Ignoring filter: {}", other),
    }
}
