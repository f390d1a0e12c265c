//! Destinations catalog: facet filters, search and sorting
//!
//! Filtering produces the list of visible cards together with the small
//! stagger used when cards fade back in after a filter change.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::str::FromStr;

/// Stagger between cards re-appearing after a filter change (50ms)
pub const FILTER_STAGGER_MS: u32 = 50;

/// Select value meaning "no constraint"
pub const ALL: &str = "all";

/// A destination card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Destination {
    pub name: String,
    pub region: String,
    pub country: String,
    pub setting: String,
    pub season: String,
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Destination {
    /// Case-insensitive match on name, description or tags.
    /// An empty term matches everything.
    pub fn matches_search(&self, term: &str) -> bool {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return true;
        }
        self.name.to_lowercase().contains(&term)
            || self.description.to_lowercase().contains(&term)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&term))
    }
}

/// Indices of destinations matching a search term, in catalog order
pub fn search(destinations: &[Destination], term: &str) -> Vec<usize> {
    destinations
        .iter()
        .enumerate()
        .filter(|(_, d)| d.matches_search(term))
        .map(|(i, _)| i)
        .collect()
}

/// Facets of the filter bar; `None` means "all"
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DestinationFilter {
    pub region: Option<String>,
    pub country: Option<String>,
    pub setting: Option<String>,
    pub season: Option<String>,
}

/// Cards left visible by a filter, with their fade-in delay
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterOutcome {
    /// `(index into the catalog, delay_ms)` in catalog order
    pub visible: Vec<(usize, u32)>,
}

impl FilterOutcome {
    /// Nothing matched: show the "no results" panel
    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    pub fn is_visible(&self, index: usize) -> bool {
        self.visible.iter().any(|(i, _)| *i == index)
    }
}

fn facet(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() || value == ALL {
        None
    } else {
        Some(value.to_string())
    }
}

fn facet_matches(wanted: &Option<String>, actual: &str) -> bool {
    wanted.as_deref().is_none_or(|w| w == actual)
}

impl DestinationFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a facet from a select value; `"all"` or empty clears it
    pub fn set(&mut self, name: &str, value: &str) -> bool {
        let slot = match name {
            "region" => &mut self.region,
            "country" => &mut self.country,
            "setting" => &mut self.setting,
            "season" => &mut self.season,
            _ => return false,
        };
        *slot = facet(value);
        true
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn matches(&self, destination: &Destination) -> bool {
        facet_matches(&self.region, &destination.region)
            && facet_matches(&self.country, &destination.country)
            && facet_matches(&self.setting, &destination.setting)
            && facet_matches(&self.season, &destination.season)
    }

    /// Visible cards with `FILTER_STAGGER_MS` per visible card
    pub fn apply(&self, destinations: &[Destination]) -> FilterOutcome {
        let visible = destinations
            .iter()
            .enumerate()
            .filter(|(_, d)| self.matches(d))
            .map(|(i, _)| i)
            .zip((0u32..).map(|n| n.saturating_mul(FILTER_STAGGER_MS)))
            .collect();
        FilterOutcome { visible }
    }

    /// Select a region; a country outside that region is cleared
    pub fn select_region(&mut self, region: &str) {
        self.region = facet(region);
        if let Some(country) = &self.country {
            if !countries_for_region(self.region.as_deref()).contains(&country.as_str()) {
                self.country = None;
            }
        }
    }

    /// Query parameters for the current filter; "all" facets are omitted
    pub fn to_query_pairs(&self) -> Vec<(&'static str, String)> {
        [
            ("region", &self.region),
            ("country", &self.country),
            ("setting", &self.setting),
            ("season", &self.season),
        ]
        .into_iter()
        .filter_map(|(name, value)| value.clone().map(|v| (name, v)))
        .collect()
    }

    /// Build a filter from query parameters; unknown names are ignored
    pub fn from_query_pairs<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let mut filter = Self::default();
        for (name, value) in pairs {
            filter.set(name, value);
        }
        filter
    }
}

/// Countries offered in the country select for a region (`None` = all regions)
pub fn countries_for_region(region: Option<&str>) -> &'static [&'static str] {
    match region {
        Some("europe") => &["italy", "greece", "iceland"],
        Some("asia") => &["japan", "thailand"],
        Some("americas") => &["peru"],
        Some("africa") => &["egypt"],
        Some("oceania") => &["australia"],
        _ => &[
            "italy",
            "japan",
            "thailand",
            "greece",
            "peru",
            "egypt",
            "australia",
            "iceland",
        ],
    }
}

/// Sort options of the destinations page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Default,
    NameAsc,
    NameDesc,
    Region,
}

impl SortOrder {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortOrder::Default => "default",
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::Region => "region",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SortOrder::Default => "Default Order",
            SortOrder::NameAsc => "Name (A-Z)",
            SortOrder::NameDesc => "Name (Z-A)",
            SortOrder::Region => "By Region",
        }
    }

    pub fn all() -> [SortOrder; 4] {
        [
            SortOrder::Default,
            SortOrder::NameAsc,
            SortOrder::NameDesc,
            SortOrder::Region,
        ]
    }

    fn compare(&self, a: &Destination, b: &Destination) -> Ordering {
        match self {
            SortOrder::Default => Ordering::Equal,
            SortOrder::NameAsc => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
            SortOrder::NameDesc => b.name.to_lowercase().cmp(&a.name.to_lowercase()),
            SortOrder::Region => a.region.cmp(&b.region),
        }
    }

    /// Display order as a permutation of catalog indices (stable)
    pub fn sort(&self, destinations: &[Destination]) -> Vec<usize> {
        let mut order: Vec<usize> = (0..destinations.len()).collect();
        order.sort_by(|&a, &b| self.compare(&destinations[a], &destinations[b]));
        order
    }
}

impl FromStr for SortOrder {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(SortOrder::Default),
            "name-asc" => Ok(SortOrder::NameAsc),
            "name-desc" => Ok(SortOrder::NameDesc),
            "region" => Ok(SortOrder::Region),
            _ => Err(()),
        }
    }
}
