pub mod errors;
pub mod events;
pub mod filter;
pub mod ids;
pub mod swipe;

pub use errors::TriageError;
pub use events::{Category, Event, InvalidEvent};
pub use filter::{CategoryFilter, FilterState};
pub use ids::{EntryId, EventId};
pub use swipe::{CalendarVisibility, SwipeAction, SwipeDirection};
