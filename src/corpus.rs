//! Joke corpus access
//!
//! The router only ever sees a [`JokeStore`] handle; the production
//! implementation is the SQLite [`Database`], tests use the in-memory mocks.

#[cfg(test)]
pub mod testing;

use crate::db::{Database, Joke, StoreError, StoreResult};
use async_trait::async_trait;
use std::sync::Arc;

/// Jokes inserted on first boot
pub const NERDY_JOKES: [&str; 9] = [
    "What do you get when you put root beer in a square class? Beer",
    "C, E Flat, and G walk into a bar. The bartender says, \"Sorry, no minors.\"",
    "The past, the present, and the future walked into a bar. It was tense.",
    "What's another name for santa's elves? It's subordinate clauses.",
    "Helium walks into a bar and orders a beer. The bartender says, \"Sorry, We don't serve noble gases here.\" He doesn't react",
    "A photon checks into a hotel and the bellhop asks him if he has any luggage. The photon replies, \"No, I'm travelling light.\"",
    "Why can't you trust atom? because they make up everything?",
    "The first rule of tautology club is the first rule of tautology club.",
    "A biologist, a chemist, and a statistician are out for hunting. The biologist shoots at a deer and misses 5 feet to the left. The chemist shoots and misses 5 feet to the right. The statistician yells, \"We got them!\"",
];

/// Durable joke storage
#[async_trait]
pub trait JokeStore: Send + Sync {
    /// Insert `initial_set` if the corpus is empty; returns the inserted count
    async fn seed(&self, initial_set: &[&str]) -> StoreResult<usize>;

    /// Current number of stored jokes
    async fn joke_count(&self) -> StoreResult<usize>;

    /// Uniformly random joke from the live corpus
    async fn random_joke(&self) -> StoreResult<Joke>;
}

#[async_trait]
impl<T: JokeStore + ?Sized> JokeStore for Arc<T> {
    async fn seed(&self, initial_set: &[&str]) -> StoreResult<usize> {
        (**self).seed(initial_set).await
    }

    async fn joke_count(&self) -> StoreResult<usize> {
        (**self).joke_count().await
    }

    async fn random_joke(&self) -> StoreResult<Joke> {
        (**self).random_joke().await
    }
}

/// SQLite calls block, so they run on the blocking pool rather than on the
/// async worker that is serving the request.
#[async_trait]
impl JokeStore for Database {
    async fn seed(&self, initial_set: &[&str]) -> StoreResult<usize> {
        let db = self.clone();
        let initial_set: Vec<String> = initial_set.iter().map(|s| (*s).to_string()).collect();
        tokio::task::spawn_blocking(move || db.seed(initial_set.as_slice())).await?
    }

    async fn joke_count(&self) -> StoreResult<usize> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.joke_count()).await?
    }

    async fn random_joke(&self) -> StoreResult<Joke> {
        let db = self.clone();
        tokio::task::spawn_blocking(move || db.random_joke()).await?
    }
}

/// Startup barrier: seed the corpus and confirm it is servable.
///
/// Must complete before the listener accepts requests. Returns the corpus
/// size; an empty corpus after seeding is reported as [`StoreError::CorpusEmpty`].
pub async fn initialize(store: &dyn JokeStore, initial_set: &[&str]) -> StoreResult<usize> {
    let inserted = store.seed(initial_set).await?;
    if inserted > 0 {
        tracing::info!(inserted, "Seeded joke corpus");
    }

    let size = store.joke_count().await?;
    if size == 0 {
        return Err(StoreError::CorpusEmpty);
    }

    tracing::info!(size, "Joke corpus ready");
    Ok(size)
}
