//! Database schema and types

use chrono::{DateTime, Utc};

/// SQL schema for initialization
pub const SCHEMA: &str = r"
CREATE TABLE IF NOT EXISTS jokes (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
    updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now'))
);
";

/// Stable identifier of a stored joke. Opaque: ids are not guaranteed to be
/// contiguous and must never be derived from a position in the seed list.
pub type JokeId = i64;

/// Joke record
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Joke {
    pub id: JokeId,
    pub content: String,
    #[allow(dead_code)] // Bookkeeping only
    pub created_at: DateTime<Utc>,
    #[allow(dead_code)] // Bookkeeping only
    pub updated_at: DateTime<Utc>,
}
