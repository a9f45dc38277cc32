use chrono::Utc;
use rusqlite::Row;
use tracing::instrument;

use outta_core::events::Event;
use outta_core::ids::EventId;

use crate::database::Database;
use crate::error::StoreError;

const EVENT_COLUMNS: &str = "id, title, category, description, location, area, date, price,
                             capacity, attending, friends_interested, image_url";

/// Catalog access. Events are written once by `seed` and read in a
/// fixed order ever after; the triage engine never mutates them.
pub struct EventRepo {
    db: Database,
}

impl EventRepo {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// Replace the catalog with the given events, preserving their
    /// order as the catalog order. Each event is validated first;
    /// nothing is written if any record is invalid. Re-seeding the
    /// same data is a no-op in effect (same ids, same positions).
    #[instrument(skip_all, fields(count = events.len()))]
    pub fn seed(&self, events: &[Event]) -> Result<usize, StoreError> {
        for event in events {
            event
                .validate()
                .map_err(|e| StoreError::Validation(format!("{}: {e}", event.id)))?;
        }

        self.db.with_conn(|conn| {
            let now = Utc::now().to_rfc3339();
            conn.execute("DELETE FROM events", [])?;
            let mut stmt = conn.prepare(
                "INSERT INTO events (id, title, category, description, location, area, date,
                                     price, capacity, attending, friends_interested, image_url,
                                     position, created_at)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11, ?12, ?13, ?14)",
            )?;
            for (position, event) in events.iter().enumerate() {
                stmt.execute(rusqlite::params![
                    event.id.as_str(),
                    event.title,
                    event.category.label(),
                    event.description,
                    event.location,
                    event.area,
                    event.date,
                    event.price,
                    event.capacity,
                    event.attending,
                    event.friends_interested,
                    event.image_url,
                    position as i64,
                    now,
                ])?;
            }
            Ok(events.len())
        })
    }

    /// The full catalog in catalog order.
    #[instrument(skip(self))]
    pub fn list(&self) -> Result<Vec<Event>, StoreError> {
        self.db.with_conn(|conn| {
            let mut stmt = conn.prepare(&format!(
                "SELECT {EVENT_COLUMNS} FROM events ORDER BY position"
            ))?;
            let raw = stmt
                .query_map([], read_row)?
                .collect::<Result<Vec<_>, _>>()?;
            raw.into_iter().map(into_event).collect()
        })
    }

    /// Get one event by ID.
    #[instrument(skip(self), fields(event_id = %id))]
    pub fn get(&self, id: &EventId) -> Result<Event, StoreError> {
        self.db.with_conn(|conn| {
            let raw = conn
                .query_row(
                    &format!("SELECT {EVENT_COLUMNS} FROM events WHERE id = ?1"),
                    [id.as_str()],
                    read_row,
                )
                .map_err(|_| StoreError::NotFound(format!("event {id}")))?;
            into_event(raw)
        })
    }

    pub fn count(&self) -> Result<i64, StoreError> {
        self.db.with_conn(|conn| {
            conn.query_row("SELECT COUNT(*) FROM events", [], |row| row.get(0))
                .map_err(StoreError::from)
        })
    }
}

/// Raw row image; the category label is parsed in a second step so
/// rusqlite's row closure stays infallible beyond SQL errors.
struct RawEvent {
    id: String,
    title: String,
    category: String,
    description: String,
    location: String,
    area: String,
    date: String,
    price: String,
    capacity: u32,
    attending: u32,
    friends_interested: u32,
    image_url: String,
}

fn read_row(row: &Row<'_>) -> rusqlite::Result<RawEvent> {
    Ok(RawEvent {
        id: row.get(0)?,
        title: row.get(1)?,
        category: row.get(2)?,
        description: row.get(3)?,
        location: row.get(4)?,
        area: row.get(5)?,
        date: row.get(6)?,
        price: row.get(7)?,
        capacity: row.get(8)?,
        attending: row.get(9)?,
        friends_interested: row.get(10)?,
        image_url: row.get(11)?,
    })
}

fn into_event(raw: RawEvent) -> Result<Event, StoreError> {
    let category = raw.category.parse().map_err(StoreError::Validation)?;
    Ok(Event {
        id: EventId::from_raw(raw.id),
        title: raw.title,
        category,
        description: raw.description,
        location: raw.location,
        area: raw.area,
        date: raw.date,
        price: raw.price,
        capacity: raw.capacity,
        attending: raw.attending,
        friends_interested: raw.friends_interested,
        image_url: raw.image_url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use outta_core::events::Category;

    fn test_db() -> Database {
        Database::in_memory().unwrap()
    }

    fn event(id: &str, title: &str, category: Category) -> Event {
        Event {
            id: EventId::from_raw(id),
            title: title.to_string(),
            category,
            description: format!("{title} in Delhi"),
            location: "Connaught Place".to_string(),
            area: "Central Delhi".to_string(),
            date: "Mar 7 \u{2022} 6:00 PM".to_string(),
            price: "\u{20b9}299".to_string(),
            capacity: 80,
            attending: 25,
            friends_interested: 2,
            image_url: String::new(),
        }
    }

    #[test]
    fn seed_and_list_preserves_order() {
        let repo = EventRepo::new(test_db());
        let events = vec![
            event("evt_a", "Indie Music Fest", Category::Music),
            event("evt_b", "Startup Mixer", Category::Tech),
            event("evt_c", "Jazz Night", Category::Music),
        ];
        let n = repo.seed(&events).unwrap();
        assert_eq!(n, 3);

        let listed = repo.list().unwrap();
        assert_eq!(listed, events);
    }

    #[test]
    fn reseed_replaces_catalog() {
        let repo = EventRepo::new(test_db());
        repo.seed(&[event("evt_a", "First", Category::Art)]).unwrap();
        repo.seed(&[
            event("evt_b", "Second", Category::Comedy),
            event("evt_c", "Third", Category::Sports),
        ])
        .unwrap();

        let listed = repo.list().unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].title, "Second");
        assert_eq!(repo.count().unwrap(), 2);
    }

    #[test]
    fn seed_rejects_invalid_event() {
        let repo = EventRepo::new(test_db());
        let mut bad = event("evt_bad", "Overbooked", Category::Festival);
        bad.capacity = 5;
        bad.attending = 9;

        let err = repo
            .seed(&[event("evt_ok", "Fine", Category::Art), bad])
            .unwrap_err();
        assert!(matches!(err, StoreError::Validation(_)));
        // Nothing was written.
        assert_eq!(repo.count().unwrap(), 0);
    }

    #[test]
    fn get_by_id() {
        let repo = EventRepo::new(test_db());
        repo.seed(&[event("evt_a", "Pottery Workshop", Category::Workshop)])
            .unwrap();

        let fetched = repo.get(&EventId::from_raw("evt_a")).unwrap();
        assert_eq!(fetched.title, "Pottery Workshop");
        assert_eq!(fetched.category, Category::Workshop);
    }

    #[test]
    fn get_nonexistent_fails() {
        let repo = EventRepo::new(test_db());
        let result = repo.get(&EventId::from_raw("evt_missing"));
        assert!(matches!(result, Err(StoreError::NotFound(_))));
    }

    #[test]
    fn empty_catalog_lists_empty() {
        let repo = EventRepo::new(test_db());
        assert!(repo.list().unwrap().is_empty());
        assert_eq!(repo.count().unwrap(), 0);
    }
}
