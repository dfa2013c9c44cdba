//! Error types for dataset loading, filtering, and location lookup

use thiserror::Error;

/// Failures that prevent a dataset from loading at all
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("Failed to read dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dataset is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Dataset must be an array of records or an object with a 'hospitals' array")]
    NotAList,
}

/// A data-quality problem found in a single record.
///
/// `skipped()` defects removed the record from the dataset; the rest are
/// reported while the record is kept.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DataDefect {
    #[error("record #{index}: not an object")]
    NotAnObject { index: usize },

    #[error("record #{index}: missing name")]
    MissingName { index: usize },

    #[error("record #{index} ('{name}'): missing or invalid position")]
    MissingPosition { index: usize, name: String },

    #[error("record #{index} ('{name}'): {detail}")]
    Suspect {
        index: usize,
        name: String,
        detail: String,
    },
}

impl DataDefect {
    pub fn skipped(&self) -> bool {
        !matches!(self, DataDefect::Suspect { .. })
    }
}

/// Errors raised while mutating a filter selection
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FilterError {
    #[error("'{value}' is not a known {kind} in this dataset")]
    UnknownFacet { kind: String, value: String },

    #[error("Invalid facet filter '{0}', expected 'kind=value'")]
    InvalidFormat(String),

    #[error("Unknown facet kind '{0}', expected 'specialty' or 'resource'")]
    UnknownKind(String),
}

/// Reasons a current-position request can fail
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("Location permission denied")]
    PermissionDenied,

    #[error("Location unavailable: {0}")]
    Unavailable(String),

    #[error("Location request timed out")]
    Timeout,
}
