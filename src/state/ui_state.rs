use std::collections::HashMap;

use crate::cli::ViewMode;

/// Display state of one region group in the list view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RegionDisplay {
    #[default]
    Collapsed,
    Expanded,
}

impl RegionDisplay {
    pub fn toggle(self) -> Self {
        match self {
            RegionDisplay::Collapsed => RegionDisplay::Expanded,
            RegionDisplay::Expanded => RegionDisplay::Collapsed,
        }
    }
}

/// UI flow state management
/// This struct contains only presentation state (view, expanded regions)
#[derive(Debug)]
pub struct UiState {
    /// Presentation being rendered
    pub view: ViewMode,
    /// Regions that have been toggled at least once; absent means collapsed
    regions: HashMap<String, RegionDisplay>,
}

impl UiState {
    pub fn new(view: ViewMode) -> Self {
        Self {
            view,
            regions: HashMap::new(),
        }
    }

    pub fn region_display(&self, region: &str) -> RegionDisplay {
        self.regions.get(region).copied().unwrap_or_default()
    }

    pub fn is_expanded(&self, region: &str) -> bool {
        self.region_display(region) == RegionDisplay::Expanded
    }

    /// Flip a region between collapsed and expanded, returning the new state
    pub fn toggle_region(&mut self, region: &str) -> RegionDisplay {
        let next = self.region_display(region).toggle();
        self.regions.insert(region.to_string(), next);
        next
    }

    /// Expand every given region that is currently collapsed
    pub fn expand_all<'a>(&mut self, regions: impl IntoIterator<Item = &'a str>) {
        for region in regions {
            if !self.is_expanded(region) {
                self.toggle_region(region);
            }
        }
    }
}
