use serde::{Deserialize, Serialize};

use crate::errors::TriageError;

/// A directional gesture on the top card. The only input the triage
/// engine accepts; there is no fifth direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
    Up,
    Down,
}

impl SwipeDirection {
    pub const ALL: [SwipeDirection; 4] = [
        SwipeDirection::Left,
        SwipeDirection::Right,
        SwipeDirection::Up,
        SwipeDirection::Down,
    ];

    /// The fixed direction-to-action mapping.
    pub fn action(self) -> SwipeAction {
        match self {
            Self::Left => SwipeAction::Discard,
            Self::Right => SwipeAction::SaveToPrivateCalendar,
            Self::Up => SwipeAction::SaveToPublicCalendar,
            Self::Down => SwipeAction::SaveForLater,
        }
    }
}

impl std::fmt::Display for SwipeDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Up => "up",
            Self::Down => "down",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for SwipeDirection {
    type Err = TriageError;

    /// Parses the gesture vocabulary the host UIs use: full direction
    /// names or their single-letter shorthands, case-insensitive.
    /// Anything else is `InvalidDirection`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "left" | "l" => Ok(Self::Left),
            "right" | "r" => Ok(Self::Right),
            "up" | "u" => Ok(Self::Up),
            "down" | "d" => Ok(Self::Down),
            _ => Err(TriageError::InvalidDirection(s.to_string())),
        }
    }
}

/// The classified outcome of a gesture.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeAction {
    Discard,
    SaveToPrivateCalendar,
    SaveToPublicCalendar,
    SaveForLater,
}

impl SwipeAction {
    /// Which calendar bucket this action files the event into, if any.
    /// Discard persists nothing.
    pub fn visibility(self) -> Option<CalendarVisibility> {
        match self {
            Self::Discard => None,
            Self::SaveToPrivateCalendar => Some(CalendarVisibility::Private),
            Self::SaveToPublicCalendar => Some(CalendarVisibility::Public),
            Self::SaveForLater => Some(CalendarVisibility::Saved),
        }
    }

    /// User-facing confirmation text.
    pub fn label(self) -> &'static str {
        match self {
            Self::Discard => "Not Interested",
            Self::SaveToPrivateCalendar => "Added to Private Calendar",
            Self::SaveToPublicCalendar => "Added to Public Calendar",
            Self::SaveForLater => "Saved for Later",
        }
    }

    /// Stable identifier used in the swipe log.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Discard => "discard",
            Self::SaveToPrivateCalendar => "save_to_private_calendar",
            Self::SaveToPublicCalendar => "save_to_public_calendar",
            Self::SaveForLater => "save_for_later",
        }
    }
}

impl std::fmt::Display for SwipeAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for SwipeAction {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "discard" => Ok(Self::Discard),
            "save_to_private_calendar" => Ok(Self::SaveToPrivateCalendar),
            "save_to_public_calendar" => Ok(Self::SaveToPublicCalendar),
            "save_for_later" => Ok(Self::SaveForLater),
            other => Err(format!("unknown swipe action: {other}")),
        }
    }
}

/// Which calendar a saved event lands in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarVisibility {
    /// Visible to connections.
    Public,
    /// Only the owner sees it.
    Private,
    /// Bookmarked, undecided.
    Saved,
}

impl std::fmt::Display for CalendarVisibility {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Public => "public",
            Self::Private => "private",
            Self::Saved => "saved",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for CalendarVisibility {
    type Err = String;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "public" => Ok(Self::Public),
            "private" => Ok(Self::Private),
            "saved" => Ok(Self::Saved),
            other => Err(format!("unknown calendar visibility: {other}")),
        }
    }
}
