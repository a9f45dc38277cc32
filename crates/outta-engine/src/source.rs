use outta_core::events::Event;
use outta_store::EventRepo;

use crate::error::EngineError;

/// Where the catalog comes from. The controller fetches once, up
/// front; a session never re-fetches mid-deck.
pub trait EventSource {
    fn fetch_all(&self) -> Result<Vec<Event>, EngineError>;
}

/// A fixed, in-memory catalog (demo data, tests).
pub struct StaticCatalog {
    events: Vec<Event>,
}

impl StaticCatalog {
    pub fn new(events: Vec<Event>) -> Self {
        Self { events }
    }
}

impl EventSource for StaticCatalog {
    fn fetch_all(&self) -> Result<Vec<Event>, EngineError> {
        Ok(self.events.clone())
    }
}

/// The seeded catalog in the database.
pub struct StoredCatalog {
    repo: EventRepo,
}

impl StoredCatalog {
    pub fn new(repo: EventRepo) -> Self {
        Self { repo }
    }
}

impl EventSource for StoredCatalog {
    fn fetch_all(&self) -> Result<Vec<Event>, EngineError> {
        Ok(self.repo.list()?)
    }
}
