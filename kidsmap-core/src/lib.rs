// Public modules
pub mod error;
pub mod facets;
pub mod filtering;
pub mod grouping;
pub mod ingest;
pub mod io;
pub mod location;
pub mod models;
pub mod query;
pub mod schema_validation;
pub mod sorting;
pub mod validation;

// Re-export commonly used types for convenience
pub use error::{DataDefect, FilterError, LoadError, LocationError};
pub use facets::{extract_facets, FacetKind, FacetUniverse};
pub use filtering::{
    apply_filters, has_filters, matches_filters, matches_search, parse_facet_filters,
    FacetSelection, FilterState,
};
pub use grouping::{get_sorted_group_names, group_by_region, RegionGroup};
pub use ingest::{ingest_document, parse_dataset, Dataset, UNKNOWN_REGION};
pub use io::{load_embedded, load_hospitals, save_hospitals};
pub use location::{
    resolve_map_view, CenterSource, FixedLocation, LocationProvider, MapView, NoLocation,
};
pub use models::{Day, Hospital, Hours, OperatingInterval, Position};
pub use query::{HospitalQueryEngine, QueryResult};
pub use schema_validation::{check_record_shape, validate_against_schema};
pub use sorting::{compare_locale, normalize_for_sorting, sort_by_name};
pub use validation::validate_dataset;
