use serde::{Deserialize, Serialize};

use crate::events::{Category, Event};

/// Category selection: everything, or exactly one category.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl std::fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(cat) => f.write_str(cat.label()),
        }
    }
}

impl std::str::FromStr for CategoryFilter {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "All" {
            return Ok(Self::All);
        }
        s.parse::<Category>().map(Self::Only)
    }
}

/// The current filter selection: a category pill plus the search box
/// text. Mutated only by explicit user filter actions; any change
/// invalidates the deck session built from it.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterState {
    pub fn new(category: CategoryFilter, query: impl Into<String>) -> Self {
        Self {
            category,
            query: query.into(),
        }
    }

    /// True when no filtering is in effect.
    pub fn is_unfiltered(&self) -> bool {
        self.category == CategoryFilter::All && self.query.trim().is_empty()
    }

    /// Whether an event survives this filter. Category equality first
    /// (exact), then a case-insensitive substring match of the trimmed
    /// query against title, location, area, category label, or
    /// description. The two compose by AND.
    pub fn matches(&self, event: &Event) -> bool {
        if let CategoryFilter::Only(cat) = self.category {
            if event.category != cat {
                return false;
            }
        }

        let query = self.query.trim();
        if query.is_empty() {
            return true;
        }
        let q = query.to_lowercase();
        event.title.to_lowercase().contains(&q)
            || event.location.to_lowercase().contains(&q)
            || event.area.to_lowercase().contains(&q)
            || event.category.label().to_lowercase().contains(&q)
            || event.description.to_lowercase().contains(&q)
    }
}
