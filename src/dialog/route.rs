//! Pure event classification
//!
//! `route` has no I/O and no memory of earlier turns: the confirmation
//! sub-dialog is reconstructed from the `Want` slot on every request.

use super::event::{ConversationEvent, Slots};
use super::intent::{is_affirmative, Intent, WANT_SLOT};
use thiserror::Error;

/// What the dialog should do for one event
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Greet,
    Help,
    TellJoke,
    Farewell,
}

/// Routing failures. All of them are recovered with the fallback reply.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("Unknown intent: {0}")]
    UnknownIntent(String),
    #[error("Slot {slot} missing or unreadable for intent {intent}")]
    MalformedSlot { intent: Intent, slot: &'static str },
    #[error("Unrecognized request")]
    UnrecognizedRequest,
}

type IntentHandler = fn(&Slots) -> Result<Action, RouteError>;

/// Classify an event
pub fn route(event: &ConversationEvent) -> Result<Action, RouteError> {
    match event {
        ConversationEvent::Launch => Ok(Action::Greet),
        ConversationEvent::Intent { name, slots } => {
            let intent =
                Intent::lookup(name).ok_or_else(|| RouteError::UnknownIntent(name.clone()))?;
            handler_for(intent)(slots)
        }
        ConversationEvent::Unknown => Err(RouteError::UnrecognizedRequest),
    }
}

fn handler_for(intent: Intent) -> IntentHandler {
    match intent {
        Intent::TellJoke => handle_tell_joke,
        Intent::Help => handle_help,
        Intent::ConfirmationReply => handle_confirmation,
    }
}

#[allow(clippy::unnecessary_wraps)] // Shared handler signature
fn handle_tell_joke(_slots: &Slots) -> Result<Action, RouteError> {
    Ok(Action::TellJoke)
}

#[allow(clippy::unnecessary_wraps)] // Shared handler signature
fn handle_help(_slots: &Slots) -> Result<Action, RouteError> {
    Ok(Action::Help)
}

fn handle_confirmation(slots: &Slots) -> Result<Action, RouteError> {
    let want = slots.get(WANT_SLOT).ok_or(RouteError::MalformedSlot {
        intent: Intent::ConfirmationReply,
        slot: WANT_SLOT,
    })?;

    if is_affirmative(want) {
        Ok(Action::TellJoke)
    } else {
        Ok(Action::Farewell)
    }
}
