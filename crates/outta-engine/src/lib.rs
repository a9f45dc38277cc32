pub mod controller;
pub mod error;
pub mod filter;
pub mod session;
pub mod sink;
pub mod source;

pub use controller::ExploreController;
pub use error::EngineError;
pub use filter::filter_events;
pub use session::{DeckSession, SwipeOutcome};
pub use sink::{ActionSink, CalendarSink, NullSink};
pub use source::{EventSource, StaticCatalog, StoredCatalog};
