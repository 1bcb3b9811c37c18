//! Mock joke stores for testing

use super::JokeStore;
use crate::db::{Joke, JokeId, StoreError, StoreResult};
use async_trait::async_trait;
use chrono::Utc;
use rand::seq::SliceRandom;
use std::sync::Mutex;

/// In-memory corpus with the same seeding and selection contract as the database
#[derive(Default)]
pub struct InMemoryJokeStore {
    jokes: Mutex<Vec<Joke>>,
}

impl InMemoryJokeStore {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_jokes(contents: &[&str]) -> Self {
        let store = Self::empty();
        store.insert_all(contents);
        store
    }

    pub fn contents(&self) -> Vec<String> {
        self.jokes
            .lock()
            .unwrap()
            .iter()
            .map(|j| j.content.clone())
            .collect()
    }

    fn insert_all(&self, contents: &[&str]) -> usize {
        let mut jokes = self.jokes.lock().unwrap();
        let now = Utc::now();
        for content in contents {
            let id = JokeId::try_from(jokes.len()).unwrap() + 1;
            jokes.push(Joke {
                id,
                content: (*content).to_string(),
                created_at: now,
                updated_at: now,
            });
        }
        contents.len()
    }
}

#[async_trait]
impl JokeStore for InMemoryJokeStore {
    async fn seed(&self, initial_set: &[&str]) -> StoreResult<usize> {
        if !self.jokes.lock().unwrap().is_empty() {
            return Ok(0);
        }
        Ok(self.insert_all(initial_set))
    }

    async fn joke_count(&self) -> StoreResult<usize> {
        Ok(self.jokes.lock().unwrap().len())
    }

    async fn random_joke(&self) -> StoreResult<Joke> {
        let jokes = self.jokes.lock().unwrap();
        jokes
            .choose(&mut rand::thread_rng())
            .cloned()
            .ok_or(StoreError::CorpusEmpty)
    }
}

/// Store whose medium is unreachable; every call fails
pub struct FailingJokeStore;

impl FailingJokeStore {
    fn io_error() -> StoreError {
        StoreError::Sqlite(rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_IOERR),
            Some("disk I/O error".to_string()),
        ))
    }
}

#[async_trait]
impl JokeStore for FailingJokeStore {
    async fn seed(&self, _initial_set: &[&str]) -> StoreResult<usize> {
        Err(Self::io_error())
    }

    async fn joke_count(&self) -> StoreResult<usize> {
        Err(Self::io_error())
    }

    async fn random_joke(&self) -> StoreResult<Joke> {
        Err(Self::io_error())
    }
}
