use serde::{Deserialize, Serialize};

use crate::ids::EventId;

/// The fixed set of event categories the catalog understands.
/// Labels double as the storage and display form ("Food & Drink", not
/// a mangled identifier), so they round-trip through the database and
/// user input unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    Networking,
    #[serde(rename = "Food & Drink")]
    FoodAndDrink,
    Music,
    Fitness,
    Art,
    Comedy,
    Business,
    Workshop,
    Cultural,
    Festival,
    Outdoor,
    Social,
    Wellness,
    Tech,
    Sports,
    Theatre,
    Entertainment,
}

impl Category {
    pub const ALL: [Category; 17] = [
        Category::Networking,
        Category::FoodAndDrink,
        Category::Music,
        Category::Fitness,
        Category::Art,
        Category::Comedy,
        Category::Business,
        Category::Workshop,
        Category::Cultural,
        Category::Festival,
        Category::Outdoor,
        Category::Social,
        Category::Wellness,
        Category::Tech,
        Category::Sports,
        Category::Theatre,
        Category::Entertainment,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Self::Networking => "Networking",
            Self::FoodAndDrink => "Food & Drink",
            Self::Music => "Music",
            Self::Fitness => "Fitness",
            Self::Art => "Art",
            Self::Comedy => "Comedy",
            Self::Business => "Business",
            Self::Workshop => "Workshop",
            Self::Cultural => "Cultural",
            Self::Festival => "Festival",
            Self::Outdoor => "Outdoor",
            Self::Social => "Social",
            Self::Wellness => "Wellness",
            Self::Tech => "Tech",
            Self::Sports => "Sports",
            Self::Theatre => "Theatre",
            Self::Entertainment => "Entertainment",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for Category {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|c| c.label() == s)
            .copied()
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Validation failures for an [`Event`] record.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidEvent {
    #[error("attendance {attending} exceeds capacity {capacity}")]
    AttendanceOverCapacity { attending: u32, capacity: u32 },
    #[error("title is empty")]
    EmptyTitle,
}

/// A catalog event. Immutable once created; the triage engine only
/// ever reads these.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: EventId,
    pub title: String,
    pub category: Category,
    pub description: String,
    pub location: String,
    pub area: String,
    pub date: String,
    pub price: String,
    pub capacity: u32,
    pub attending: u32,
    pub friends_interested: u32,
    pub image_url: String,
}

impl Event {
    /// Check the record invariants: non-empty title and
    /// `attending <= capacity`. Enforced at the persistence boundary;
    /// the engine assumes events it receives already hold.
    pub fn validate(&self) -> Result<(), InvalidEvent> {
        if self.title.trim().is_empty() {
            return Err(InvalidEvent::EmptyTitle);
        }
        if self.attending > self.capacity {
            return Err(InvalidEvent::AttendanceOverCapacity {
                attending: self.attending,
                capacity: self.capacity,
            });
        }
        Ok(())
    }

    pub fn spots_left(&self) -> u32 {
        self.capacity - self.attending
    }
}
