use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use outta_core::events::Event;
use outta_core::ids::{EntryId, EventId};
use outta_core::swipe::{CalendarVisibility, SwipeAction};

use crate::database::Database;
use crate::error::StoreError;

/// A saved event in one of the calendar buckets.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CalendarEntry {
    pub id: EntryId,
    pub event: Event,
    pub visibility: CalendarVisibility,
    pub created_at: String,
}

/// Calendar membership and the swipe log. This is the durable side of
/// the action sink: the triage engine itself never touches it.
pub struct CalendarRepo {
    db: Database,
}

impl CalendarRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Append one classified gesture to the swipe log. Every gesture
    /// is logged, including discards.
    #[instrument(skip(self), fields(event_id = %event_id, action = %action))]
    pub fn log_swipe(&self, action: SwipeAction, event_id: &EventId) -> Result<(), StoreError> {
        self.db.with_conn(|conn| {
            conn.execute(
                "INSERT INTO swipe_log (event_id, action, created_at) VALUES (?1, ?2, ?3)",
                rusqlite::params![event_id.as_str(), action.as_str(), Utc::now().to_rfc3339()],
            )?;
            Ok(())
        })
    }

    /// File an event into the calendar bucket its action maps to.
    /// Returns `false` without writing when the action is Discard or
    /// when the event is already in that bucket (a replayed deck
    /// re-emits the same pairs; that is not an error).
    #[instrument(skip(self, event), fields(event_id = %event.id, action = %action))]
    pub fn record(&self, action: SwipeAction, event: &Event) -> Result<bool, StoreError> {
        let Some(visibility) = action.visibility() else {
            return Ok(false);
        };

        self.db.with_conn(|conn| {
            let inserted = conn.execute(
                "INSERT OR IGNORE INTO calendar_entries (id, event_id, visibility, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
                rusqlite::params![
                    EntryId::new().as_str(),
                    event.id.as_str(),
                    visibility.to_string(),
                    Utc::now().to_rfc3339(),
                ],
            )?;
            Ok(inserted > 0)
        })
    }

    /// List one calendar bucket, oldest entry first.
    #[instrument(skip(self), fields(visibility = %visibility))]
    pub fn list(&self, visibility: CalendarVisibility) -> Result<Vec<CalendarEntry>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(
                "SELECT c.id, c.visibility, c.created_at,
                        e.id, e.title, e.category, e.description, e.location, e.area,
                        e.date, e.price, e.capacity, e.attending, e.friends_interested, e.image_url
                 FROM calendar_entries c
                 JOIN events e ON e.id = c.event_id
                 WHERE c.visibility = ?1
                 ORDER BY c.created_at, c.id",
            )?;
            let raw = stmt
                .query_map([visibility.to_string()], |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                        row.get::<_, String>(2)?,
                        row.get::<_, String>(3)?,
                        row.get::<_, String>(4)?,
                        row.get::<_, String>(5)?,
                        row.get::<_, String>(6)?,
                        row.get::<_, String>(7)?,
                        row.get::<_, String>(8)?,
                        row.get::<_, String>(9)?,
                        row.get::<_, String>(10)?,
                        row.get::<_, u32>(11)?,
                        row.get::<_, u32>(12)?,
                        row.get::<_, u32>(13)?,
                        row.get::<_, String>(14)?,
                    ))
                })?
                .collect::<Result<Vec<_>, _>>()?;

            raw.into_iter()
                .map(|row| {
                    let (
                        entry_id,
                        vis,
                        created_at,
                        event_id,
                        title,
                        category,
                        description,
                        location,
                        area,
                        date,
                        price,
                        capacity,
                        attending,
                        friends_interested,
                        image_url,
                    ) = row;
                    Ok(CalendarEntry {
                        id: EntryId::from_raw(entry_id),
                        visibility: vis.parse().map_err(StoreError::Validation)?,
                        created_at,
                        event: Event {
                            id: EventId::from_raw(event_id),
                            title,
                            category: category.parse().map_err(StoreError::Validation)?,
                            description,
                            location,
                            area,
                            date,
                            price,
                            capacity,
                            attending,
                            friends_interested,
                            image_url,
                        },
                    })
                })
                .collect()
        })
    }

    /// Number of entries in one bucket.
    pub fn count(&self, visibility: CalendarVisibility) -> Result<i64, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row(
                "SELECT COUNT(*) FROM calendar_entries WHERE visibility = ?1",
                [visibility.to_string()],
                |row| row.get(0),
            )
            .map_err(StoreError::from)
        })
    }

    /// Total gestures recorded in the swipe log.
    pub fn swipes_logged(&self) -> Result<i64, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM swipe_log", [], |row| row.get(0))
                .map_err(StoreError::from)
        })
    }
}
