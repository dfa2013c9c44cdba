use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Children's emergency hospital directory - filter and browse hospitals by
/// name, specialty, and available resources
///
/// Examples:
///   # List every hospital grouped by region (groups collapsed)
///   kidsmap
///
///   # Expand all regions and search by name
///   kidsmap --search 세브란스 --expand-all
///
///   # Hospitals that have BOTH specialties and an X-RAY
///   kidsmap --specialty 내과 --specialty 피부과 --resource X-RAY --expand-all
///
///   # Map markers centered on a known position
///   kidsmap --view map --lat 37.55 --lon 126.99
///
///   # Show the facet values found in the dataset
///   kidsmap --facets
#[derive(Parser, Debug)]
#[command(name = "kidsmap")]
#[command(author, version, about, long_about = None)]
#[command(after_help = "Filtering Logic:\n  \
    - --search matches hospital names case-insensitively as a substring\n  \
    - Every selected specialty must be offered by a hospital (AND)\n  \
    - Every selected resource must be available at a hospital (AND)\n  \
    - Search, specialties, and resources are combined with AND\n\n\
Grouping:\n  \
    - The list view groups results by region, sorted by region name\n  \
    - Regions are collapsed unless named with --expand or --expand-all is given")]
pub struct Cli {
    /// Hospital dataset JSON file (the bundled dataset is used when omitted)
    #[arg(short, long, value_name = "FILE", env = "KIDSMAP_DATA")]
    pub data: Option<PathBuf>,

    /// Case-insensitive substring to look for in hospital names
    #[arg(short, long, value_name = "TEXT", default_value = "")]
    pub search: String,

    /// Select a specialty (repeat to require several)
    #[arg(long = "specialty", value_name = "VALUE")]
    pub specialties: Vec<String>,

    /// Select a resource (repeat to require several)
    #[arg(long = "resource", value_name = "VALUE")]
    pub resources: Vec<String>,

    /// Select a facet in "kind=value" form, kind being specialty or resource
    #[arg(short, long = "facet", value_name = "KIND=VALUE")]
    pub facets: Vec<String>,

    /// Sort results before grouping
    #[arg(long = "sort", value_enum, value_name = "FIELD")]
    pub sort_by: Option<SortField>,

    /// Presentation to render
    #[arg(long, value_enum, default_value_t = ViewMode::List)]
    pub view: ViewMode,

    /// Expand a region in the list view (can be specified multiple times)
    #[arg(short, long = "expand", value_name = "REGION")]
    pub expand: Vec<String>,

    /// Expand every region in the list view
    #[arg(long)]
    pub expand_all: bool,

    /// Current latitude, used to center the map view
    #[arg(long, requires = "lon", allow_hyphen_values = true)]
    pub lat: Option<f64>,

    /// Current longitude, used to center the map view
    #[arg(long, requires = "lat", allow_hyphen_values = true)]
    pub lon: Option<f64>,

    /// Print the specialty and resource values found in the dataset
    #[arg(long = "facets")]
    pub list_facets: bool,

    /// Print share text for the named hospital
    #[arg(long, value_name = "NAME")]
    pub share: Option<String>,

    /// Enable debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ViewMode {
    /// Region-grouped list
    List,
    /// Map center and one marker per hospital
    Map,
    /// Machine-readable query result
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortField {
    Name,
}
