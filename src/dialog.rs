//! Dialog router
//!
//! Classifies one conversation event into an action (pure), then runs the
//! action against the injected joke store and renders the reply.

mod dispatch;
pub mod event;
pub mod intent;
pub(crate) mod route;

#[cfg(test)]
mod proptests;

pub use dispatch::Dialog;
pub use event::{ConversationEvent, Slots};
