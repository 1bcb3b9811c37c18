//! Runs routed actions against the joke store

use super::event::ConversationEvent;
use super::route::{route, Action};
use crate::corpus::JokeStore;
use crate::db::StoreResult;
use crate::response::DialogResponse;
use std::sync::Arc;

/// Stateless dispatcher shared by all requests
#[derive(Clone)]
pub struct Dialog {
    store: Arc<dyn JokeStore>,
}

impl Dialog {
    pub fn new(store: Arc<dyn JokeStore>) -> Self {
        Self { store }
    }

    /// Handle one event. Always produces a reply: routing errors and storage
    /// failures both degrade to the fallback response.
    pub async fn dispatch(&self, event: &ConversationEvent) -> DialogResponse {
        let action = match route(event) {
            Ok(action) => action,
            Err(e) => {
                tracing::debug!(error = %e, "Routing fell back");
                return DialogResponse::fallback();
            }
        };
        tracing::debug!(?action, "Routed event");

        match self.perform(action).await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(error = %e, ?action, "Dispatch failed");
                DialogResponse::fallback()
            }
        }
    }

    async fn perform(&self, action: Action) -> StoreResult<DialogResponse> {
        let response = match action {
            Action::Greet => DialogResponse::greeting(),
            Action::Help => DialogResponse::help(),
            Action::Farewell => DialogResponse::farewell(),
            Action::TellJoke => {
                let joke = self.store.random_joke().await?;
                tracing::debug!(joke_id = joke.id, "Selected joke");
                DialogResponse::joke(&joke.content)
            }
        };
        Ok(response)
    }
}
