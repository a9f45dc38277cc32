use std::sync::Arc;

use tracing::{debug, info};

use outta_core::errors::TriageError;
use outta_core::events::Event;
use outta_core::filter::{CategoryFilter, FilterState};
use outta_core::swipe::SwipeDirection;

use crate::error::EngineError;
use crate::filter::filter_events;
use crate::session::{DeckSession, SwipeOutcome};
use crate::sink::ActionSink;
use crate::source::EventSource;

/// Owns the explore flow: the catalog, the filter selection, the live
/// deck session, and the action sink.
///
/// Every filter change discards the in-progress session and starts a
/// fresh one over the refiltered deck; that replacement is the only
/// cancellation mechanism, and it completes before any later gesture
/// can be classified. The superseded session holds no external
/// resources, so there is nothing to clean up.
pub struct ExploreController {
    catalog: Vec<Event>,
    filter: FilterState,
    session: DeckSession,
    sink: Arc<dyn ActionSink>,
}

impl ExploreController {
    /// Fetch the catalog once and open a session over the unfiltered
    /// deck.
    pub fn new(source: &dyn EventSource, sink: Arc<dyn ActionSink>) -> Result<Self, EngineError> {
        let catalog = source.fetch_all()?;
        let filter = FilterState::default();
        let session = DeckSession::start(filter_events(&catalog, &filter));
        debug!(catalog = catalog.len(), "explore controller started");
        Ok(Self {
            catalog,
            filter,
            session,
            sink,
        })
    }

    /// A category pill was pressed.
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filter.category = category;
        self.restart_session();
    }

    /// The search text changed.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.filter.query = query.into();
        self.restart_session();
    }

    /// Back to "All" with an empty search box.
    pub fn clear_filters(&mut self) {
        self.filter = FilterState::default();
        self.restart_session();
    }

    fn restart_session(&mut self) {
        self.session = DeckSession::start(filter_events(&self.catalog, &self.filter));
        debug!(
            category = %self.filter.category,
            query = %self.filter.query,
            deck = self.session.deck().len(),
            "filters changed, session restarted"
        );
    }

    /// Classify the top card, advance the deck, and hand the outcome
    /// to the sink. Sink failures never surface here and never block
    /// the gesture.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome, TriageError> {
        let outcome = self.session.classify(direction)?;
        info!(
            event_id = %outcome.event.id,
            action = %outcome.action,
            swiped = self.session.swipe_count(),
            "card classified"
        );
        self.sink.handle(outcome.action, &outcome.event);
        Ok(outcome)
    }

    /// Classify a raw textual gesture (the CLI path).
    pub fn swipe_str(&mut self, raw: &str) -> Result<SwipeOutcome, TriageError> {
        let direction: SwipeDirection = raw.parse()?;
        self.swipe(direction)
    }

    /// "Explore Again": replay the same deck from the top.
    pub fn reset(&mut self) {
        self.session.reset();
        debug!(deck = self.session.deck().len(), "deck replayed");
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Events matching the current filters (the deck length).
    pub fn matching_count(&self) -> usize {
        self.session.deck().len()
    }

    pub fn swipe_count(&self) -> u32 {
        self.session.swipe_count()
    }

    /// "No Events Found": nothing matches the current filters.
    pub fn is_empty(&self) -> bool {
        self.session.is_empty()
    }

    /// "All Caught Up": every matching event has been classified.
    pub fn is_exhausted(&self) -> bool {
        self.session.is_exhausted()
    }

    /// The top card, if any is left to classify.
    pub fn current(&self) -> Option<&Event> {
        self.session.current()
    }
}
