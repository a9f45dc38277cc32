use tracing::{debug, warn};

use outta_core::events::Event;
use outta_core::swipe::SwipeAction;
use outta_store::CalendarRepo;

/// Receives each classified `(action, event)` pair. The triage core
/// does not require a sink to succeed or report back: implementations
/// absorb their own failures and the gesture is never retried.
pub trait ActionSink: Send + Sync {
    fn handle(&self, action: SwipeAction, event: &Event);
}

/// Drops every action. Useful for tests and dry runs.
pub struct NullSink;

impl ActionSink for NullSink {
    fn handle(&self, _action: SwipeAction, _event: &Event) {}
}

/// The durable sink: logs every gesture and files accepted events into
/// the matching calendar bucket.
pub struct CalendarSink {
    calendar: CalendarRepo,
}

impl CalendarSink {
    pub fn new(calendar: CalendarRepo) -> Self {
        Self { calendar }
    }
}

impl ActionSink for CalendarSink {
    fn handle(&self, action: SwipeAction, event: &Event) {
        if let Err(e) = self.calendar.log_swipe(action, &event.id) {
            warn!(event_id = %event.id, error = %e, "swipe log write failed");
        }

        match self.calendar.record(action, event) {
            Ok(true) => debug!(event_id = %event.id, action = %action, "calendar entry recorded"),
            Ok(false) => {}
            Err(e) => warn!(event_id = %event.id, error = %e, "calendar write failed"),
        }
    }
}
