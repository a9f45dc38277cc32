/// Typed errors for the swipe triage engine.
///
/// Both variants are caller mistakes, not runtime faults: they are
/// surfaced as-is, never retried, and classifying never partially
/// advances a session before failing.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TriageError {
    /// `classify` was called with no card left to classify, either
    /// because the deck is empty or because it is exhausted. The host
    /// should gate gestures on `is_empty` / `is_exhausted`.
    #[error("no card to classify: cursor {cursor} of {deck_len}")]
    OutOfRange { cursor: usize, deck_len: usize },

    /// Textual gesture input that is not one of the four directions.
    #[error("unknown swipe direction: {0:?}")]
    InvalidDirection(String),
}

impl TriageError {
    /// Short classification string for logging.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::OutOfRange { .. } => "out_of_range",
            Self::InvalidDirection(_) => "invalid_direction",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_range_message_names_positions() {
        let err = TriageError::OutOfRange { cursor: 3, deck_len: 3 };
        assert_eq!(err.to_string(), "no card to classify: cursor 3 of 3");
        assert_eq!(err.kind(), "out_of_range");
    }

    #[test]
    fn invalid_direction_quotes_input() {
        let err = TriageError::InvalidDirection("sideways".into());
        assert_eq!(err.to_string(), "unknown swipe direction: \"sideways\"");
        assert_eq!(err.kind(), "invalid_direction");
    }
}
