use serde::{Deserialize, Serialize};

use outta_core::errors::TriageError;
use outta_core::events::Event;
use outta_core::swipe::{SwipeAction, SwipeDirection};

/// The classified result of one gesture: the action the direction maps
/// to, applied to the card that was on top when the gesture landed.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SwipeOutcome {
    pub action: SwipeAction,
    pub event: Event,
}

/// One pass over a filtered deck.
///
/// The deck is fixed at construction; classifying only ever advances a
/// cursor, so inspecting the session is idempotent and [`reset`] is a
/// non-destructive replay of the same cards in the same order.
///
/// Invariants, maintained by every operation:
/// - `cursor <= deck.len()`
/// - `swipe_count == cursor`
/// - `exhausted` is set exactly when the cursor reaches the end of a
///   non-empty deck
///
/// [`reset`]: DeckSession::reset
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeckSession {
    deck: Vec<Event>,
    cursor: usize,
    swipe_count: u32,
    exhausted: bool,
}

impl DeckSession {
    /// Fresh session over a filtered deck.
    pub fn start(deck: Vec<Event>) -> Self {
        Self {
            deck,
            cursor: 0,
            swipe_count: 0,
            exhausted: false,
        }
    }

    pub fn deck(&self) -> &[Event] {
        &self.deck
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn swipe_count(&self) -> u32 {
        self.swipe_count
    }

    /// No events matched the filters. Distinct from exhaustion: an
    /// empty deck never had a card to classify.
    pub fn is_empty(&self) -> bool {
        self.deck.is_empty()
    }

    /// Every card in a non-empty deck has been classified.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    pub fn remaining(&self) -> usize {
        self.deck.len() - self.cursor
    }

    /// The top card, if one is left. Does not advance.
    pub fn current(&self) -> Option<&Event> {
        self.deck.get(self.cursor)
    }

    /// Classify a gesture against the top card and advance.
    ///
    /// Fails with `OutOfRange` when no card is left (empty or
    /// exhausted deck); the session is unchanged on failure.
    pub fn classify(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome, TriageError> {
        let Some(event) = self.deck.get(self.cursor) else {
            return Err(TriageError::OutOfRange {
                cursor: self.cursor,
                deck_len: self.deck.len(),
            });
        };

        let outcome = SwipeOutcome {
            action: direction.action(),
            event: event.clone(),
        };

        self.cursor += 1;
        self.swipe_count += 1;
        if self.cursor == self.deck.len() {
            self.exhausted = true;
        }

        Ok(outcome)
    }

    /// Classify a raw textual gesture. An unrecognized token fails with
    /// `InvalidDirection` before the session is touched.
    pub fn classify_str(&mut self, raw: &str) -> Result<SwipeOutcome, TriageError> {
        let direction: SwipeDirection = raw.parse()?;
        self.classify(direction)
    }

    /// Rewind to the top of the same deck: same events, same order, no
    /// re-fetch. Used by the "explore again" affordance.
    pub fn reset(&mut self) {
        self.cursor = 0;
        self.swipe_count = 0;
        self.exhausted = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use outta_core::events::Category;
    use outta_core::ids::EventId;

    fn event(id: &str, category: Category) -> Event {
        Event {
            id: EventId::from_raw(id),
            title: format!("Event {id}"),
            category,
            description: "demo".to_string(),
            location: "India Gate".to_string(),
            area: "Central Delhi".to_string(),
            date: "Mar 8 \u{2022} 10:00 PM".to_string(),
            price: "Free".to_string(),
            capacity: 40,
            attending: 12,
            friends_interested: 0,
            image_url: String::new(),
        }
    }

    fn deck3() -> Vec<Event> {
        vec![
            event("evt_1", Category::Music),
            event("evt_2", Category::Tech),
            event("evt_3", Category::Music),
        ]
    }

    #[test]
    fn fresh_session_state() {
        let session = DeckSession::start(deck3());
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.swipe_count(), 0);
        assert!(!session.is_exhausted());
        assert!(!session.is_empty());
        assert_eq!(session.remaining(), 3);
        assert_eq!(session.current().unwrap().id.as_str(), "evt_1");
    }

    #[test]
    fn classify_applies_to_top_card_and_advances() {
        let mut session = DeckSession::start(deck3());

        let out = session.classify(SwipeDirection::Right).unwrap();
        assert_eq!(out.action, SwipeAction::SaveToPrivateCalendar);
        assert_eq!(out.event.id.as_str(), "evt_1");
        assert_eq!(session.cursor(), 1);
        assert_eq!(session.swipe_count(), 1);
        assert!(!session.is_exhausted());

        let out = session.classify(SwipeDirection::Left).unwrap();
        assert_eq!(out.action, SwipeAction::Discard);
        assert_eq!(out.event.id.as_str(), "evt_2");
        assert_eq!(session.cursor(), 2);
    }

    #[test]
    fn cursor_is_monotonic_and_counts_match() {
        let mut session = DeckSession::start(deck3());
        let mut last_cursor = 0;
        for dir in [SwipeDirection::Up, SwipeDirection::Down, SwipeDirection::Left] {
            session.classify(dir).unwrap();
            assert_eq!(session.cursor(), last_cursor + 1);
            assert_eq!(session.swipe_count() as usize, session.cursor());
            last_cursor = session.cursor();
        }
    }

    #[test]
    fn exhaustion_exactly_at_deck_end() {
        let mut session = DeckSession::start(deck3());
        session.classify(SwipeDirection::Left).unwrap();
        session.classify(SwipeDirection::Left).unwrap();
        assert!(!session.is_exhausted());
        session.classify(SwipeDirection::Left).unwrap();
        assert!(session.is_exhausted());
        assert_eq!(session.remaining(), 0);
        assert!(session.current().is_none());
    }

    #[test]
    fn classify_past_end_fails_without_mutating() {
        let mut session = DeckSession::start(vec![event("evt_1", Category::Art)]);
        session.classify(SwipeDirection::Up).unwrap();

        let before = session.clone();
        let err = session.classify(SwipeDirection::Up).unwrap_err();
        assert_eq!(err, TriageError::OutOfRange { cursor: 1, deck_len: 1 });
        assert_eq!(session, before);
    }

    #[test]
    fn empty_deck_is_empty_not_exhausted() {
        let mut session = DeckSession::start(Vec::new());
        assert!(session.is_empty());
        assert!(!session.is_exhausted());

        let err = session.classify(SwipeDirection::Left).unwrap_err();
        assert_eq!(err, TriageError::OutOfRange { cursor: 0, deck_len: 0 });
    }

    #[test]
    fn invalid_text_gesture_leaves_session_unmodified() {
        let mut session = DeckSession::start(deck3());
        session.classify_str("right").unwrap();

        let before = session.clone();
        let err = session.classify_str("sideways").unwrap_err();
        assert_eq!(err, TriageError::InvalidDirection("sideways".into()));
        assert_eq!(session, before);
    }

    #[test]
    fn inspection_is_idempotent() {
        let mut session = DeckSession::start(deck3());
        session.classify(SwipeDirection::Down).unwrap();

        for _ in 0..10 {
            assert_eq!(session.cursor(), 1);
            assert_eq!(session.swipe_count(), 1);
            assert!(!session.is_exhausted());
            assert_eq!(session.current().unwrap().id.as_str(), "evt_2");
        }
    }

    #[test]
    fn reset_replays_the_same_deck() {
        let mut session = DeckSession::start(deck3());
        let directions = [SwipeDirection::Right, SwipeDirection::Up, SwipeDirection::Left];

        let first: Vec<SwipeOutcome> = directions
            .iter()
            .map(|d| session.classify(*d).unwrap())
            .collect();
        assert!(session.is_exhausted());

        session.reset();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.swipe_count(), 0);
        assert!(!session.is_exhausted());
        assert_eq!(session.deck().len(), 3);

        let second: Vec<SwipeOutcome> = directions
            .iter()
            .map(|d| session.classify(*d).unwrap())
            .collect();
        assert_eq!(first, second);
    }

    #[test]
    fn reset_mid_deck_discards_progress() {
        let mut session = DeckSession::start(deck3());
        session.classify(SwipeDirection::Left).unwrap();
        session.classify(SwipeDirection::Left).unwrap();

        session.reset();
        assert_eq!(session.cursor(), 0);
        assert_eq!(session.current().unwrap().id.as_str(), "evt_1");
    }

    #[test]
    fn music_deck_walkthrough() {
        // Deck already filtered to [E1, E3] (both Music).
        let mut session = DeckSession::start(vec![
            event("evt_1", Category::Music),
            event("evt_3", Category::Music),
        ]);

        let out = session.classify(SwipeDirection::Right).unwrap();
        assert_eq!(out.action, SwipeAction::SaveToPrivateCalendar);
        assert_eq!(out.event.id.as_str(), "evt_1");
        assert_eq!(session.cursor(), 1);

        let out = session.classify(SwipeDirection::Up).unwrap();
        assert_eq!(out.action, SwipeAction::SaveToPublicCalendar);
        assert_eq!(out.event.id.as_str(), "evt_3");
        assert_eq!(session.cursor(), 2);
        assert!(session.is_exhausted());

        assert!(matches!(
            session.classify(SwipeDirection::Left),
            Err(TriageError::OutOfRange { .. })
        ));
    }

    #[test]
    fn session_serde_roundtrip() {
        let mut session = DeckSession::start(deck3());
        session.classify(SwipeDirection::Up).unwrap();

        let json = serde_json::to_string(&session).unwrap();
        let parsed: DeckSession = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, session);
    }
}
