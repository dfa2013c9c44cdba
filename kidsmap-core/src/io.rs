use crate::error::LoadError;
use crate::ingest::{parse_dataset, Dataset};
use crate::models::Hospital;
use std::fs;
use std::path::Path;
use tracing::info;

/// Dataset bundled into the binary
pub const EMBEDDED_DATASET: &str = include_str!("../data/hospitals.json");

/// Load and normalize a hospital dataset from a JSON file
pub fn load_hospitals<P: AsRef<Path>>(path: P) -> Result<Dataset, LoadError> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)?;
    info!(path = %path.display(), "Loading hospital dataset");
    parse_dataset(&contents)
}

/// Normalize the bundled dataset
pub fn load_embedded() -> Result<Dataset, LoadError> {
    parse_dataset(EMBEDDED_DATASET)
}

/// Save hospitals in the canonical schema with pretty printing
pub fn save_hospitals<P: AsRef<Path>>(hospitals: &[Hospital], path: P) -> Result<(), LoadError> {
    let json = serde_json::to_string_pretty(hospitals)?;
    fs::write(path, json)?;
    Ok(())
}
