/// SQL DDL for the outta-store database.
/// WAL mode + foreign keys enabled at connection time.
pub const SCHEMA_VERSION: u32 = 1;

pub const CREATE_TABLES: &str = r#"
CREATE TABLE IF NOT EXISTS events (
    id TEXT PRIMARY KEY,
    title TEXT NOT NULL,
    category TEXT NOT NULL,
    description TEXT NOT NULL,
    location TEXT NOT NULL,
    area TEXT NOT NULL,
    date TEXT NOT NULL,
    price TEXT NOT NULL,
    capacity INTEGER NOT NULL,
    attending INTEGER NOT NULL DEFAULT 0,
    friends_interested INTEGER NOT NULL DEFAULT 0,
    image_url TEXT NOT NULL,
    position INTEGER NOT NULL,
    created_at TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS calendar_entries (
    id TEXT PRIMARY KEY,
    event_id TEXT NOT NULL REFERENCES events(id) ON DELETE CASCADE,
    visibility TEXT NOT NULL,
    created_at TEXT NOT NULL,
    UNIQUE(event_id, visibility)
);

CREATE TABLE IF NOT EXISTS swipe_log (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    event_id TEXT NOT NULL,
    action TEXT NOT NULL,
    created_at TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS idx_events_position ON events(position);
CREATE INDEX IF NOT EXISTS idx_events_category ON events(category);
CREATE INDEX IF NOT EXISTS idx_entries_visibility ON calendar_entries(visibility);
CREATE INDEX IF NOT EXISTS idx_swipe_log_event ON swipe_log(event_id);

CREATE TABLE IF NOT EXISTS schema_version (
    version INTEGER NOT NULL
);
"#;

pub const PRAGMAS: &str = r#"
PRAGMA journal_mode = WAL;
PRAGMA foreign_keys = ON;
PRAGMA busy_timeout = 5000;
PRAGMA synchronous = NORMAL;
"#;
