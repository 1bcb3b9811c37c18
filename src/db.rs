//! Database module for Nerdy Joker
//!
//! Provides persistence for the joke corpus.

mod schema;

pub use schema::*;

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, TransactionBehavior};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;

/// Pooled read connections per database handle
const READ_CONNECTIONS: usize = 4;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Store unavailable: {0}")]
    Sqlite(#[from] rusqlite::Error),
    #[error("Store unavailable: connection lock poisoned")]
    LockPoisoned,
    #[error("Store unavailable: {0}")]
    Task(#[from] tokio::task::JoinError),
    #[error("Joke corpus is empty")]
    CorpusEmpty,
}

impl StoreError {
    /// True for the failures that mean storage could not be reached or used,
    /// as opposed to a reachable but empty corpus.
    #[cfg(test)]
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Sqlite(_) | Self::LockPoisoned | Self::Task(_))
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Thread-safe database handle
///
/// Writes go through a single connection. Reads take whichever pooled read
/// connection is idle, or open a fresh one when all of them are busy, so
/// concurrent reads never wait on each other.
#[derive(Clone)]
pub struct Database {
    writer: Arc<Mutex<Connection>>,
    readers: Arc<[Mutex<Connection>]>,
    target: Arc<PathBuf>,
}

impl Database {
    /// Open or create database at the given path
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path.as_ref())?;
        // Readers must not block on an open write transaction
        conn.query_row("PRAGMA journal_mode=WAL", [], |_| Ok(()))?;
        Self::with_writer(conn, path.as_ref().to_path_buf())
    }

    /// Open an in-memory database (for testing)
    ///
    /// Uses a named shared-cache database so the read connections see the
    /// same rows as the writer.
    #[cfg(test)]
    pub fn open_in_memory() -> StoreResult<Self> {
        use std::sync::atomic::{AtomicUsize, Ordering};

        static NEXT: AtomicUsize = AtomicUsize::new(0);
        let uri = format!(
            "file:nerdy-joker-{}-{}?mode=memory&cache=shared",
            std::process::id(),
            NEXT.fetch_add(1, Ordering::Relaxed)
        );
        let conn = Connection::open(&uri)?;
        Self::with_writer(conn, PathBuf::from(uri))
    }

    fn with_writer(conn: Connection, target: PathBuf) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        let readers = (0..READ_CONNECTIONS)
            .map(|_| Connection::open(&target).map(Mutex::new))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            writer: Arc::new(Mutex::new(conn)),
            readers: readers.into(),
            target: Arc::new(target),
        })
    }

    fn lock(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.writer.lock().map_err(|_| StoreError::LockPoisoned)
    }

    /// Run `f` on an idle read connection, opening a fresh one if none is free
    fn read<T>(&self, f: impl FnOnce(&Connection) -> rusqlite::Result<T>) -> StoreResult<T> {
        for slot in self.readers.iter() {
            if let Ok(conn) = slot.try_lock() {
                return f(&conn).map_err(StoreError::from);
            }
        }
        let conn = Connection::open(self.target.as_path())?;
        f(&conn).map_err(StoreError::from)
    }

    // ==================== Joke Operations ====================

    /// Seed the corpus if it is empty.
    ///
    /// The emptiness check and every insert share one immediate transaction,
    /// so a concurrent seeder either sees the committed corpus or waits, and a
    /// crash mid-seed leaves no rows behind. Returns the number of inserted
    /// jokes (zero when the corpus was already populated).
    pub fn seed<S: AsRef<str>>(&self, initial_set: &[S]) -> StoreResult<usize> {
        let mut conn = self.lock()?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let count: i64 = tx.query_row("SELECT COUNT(id) FROM jokes", [], |row| row.get(0))?;
        if count > 0 {
            return Ok(0);
        }

        let now = Utc::now().to_rfc3339();
        {
            let mut stmt = tx.prepare(
                "INSERT INTO jokes (content, created_at, updated_at) VALUES (?1, ?2, ?2)",
            )?;
            for joke in initial_set {
                stmt.execute(params![joke.as_ref(), now])?;
            }
        }
        tx.commit()?;

        Ok(initial_set.len())
    }

    /// Number of jokes currently stored
    pub fn joke_count(&self) -> StoreResult<usize> {
        let count: i64 =
            self.read(|conn| conn.query_row("SELECT COUNT(id) FROM jokes", [], |row| row.get(0)))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }

    /// Pick one joke uniformly at random from the rows that exist right now
    pub fn random_joke(&self) -> StoreResult<Joke> {
        self.read(|conn| {
            conn.query_row(
                "SELECT id, content, created_at, updated_at FROM jokes ORDER BY random() LIMIT 1",
                [],
                parse_joke_row,
            )
        })
        .map_err(|e| match e {
            StoreError::Sqlite(rusqlite::Error::QueryReturnedNoRows) => StoreError::CorpusEmpty,
            other => other,
        })
    }

    /// All stored jokes in insertion order
    #[cfg(test)]
    pub fn list_jokes(&self) -> StoreResult<Vec<Joke>> {
        self.read(|conn| {
            let mut stmt = conn
                .prepare("SELECT id, content, created_at, updated_at FROM jokes ORDER BY id ASC")?;
            let rows = stmt.query_map([], parse_joke_row)?;
            rows.collect()
        })
    }
}

/// Parse a joke row from the database
fn parse_joke_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Joke> {
    Ok(Joke {
        id: row.get(0)?,
        content: row.get(1)?,
        created_at: parse_datetime(&row.get::<_, String>(2)?),
        updated_at: parse_datetime(&row.get::<_, String>(3)?),
    })
}

fn parse_datetime(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).map_or_else(|_| Utc::now(), |dt| dt.with_timezone(&Utc))
}
