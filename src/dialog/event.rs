//! Inbound conversation events

use std::collections::HashMap;

/// Slot name to raw slot text, as extracted upstream
pub type Slots = HashMap<String, String>;

/// One parsed request from the voice platform
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversationEvent {
    /// The user opened the skill without asking for anything
    Launch,
    /// A named intent with its filled slots
    Intent { name: String, slots: Slots },
    /// Anything the transport could not classify
    Unknown,
}

#[cfg(test)]
impl ConversationEvent {
    pub fn intent(name: impl Into<String>) -> Self {
        ConversationEvent::Intent {
            name: name.into(),
            slots: Slots::new(),
        }
    }

    /// Add a slot to an intent event; no-op for other kinds
    #[must_use]
    pub fn with_slot(mut self, slot: impl Into<String>, value: impl Into<String>) -> Self {
        if let ConversationEvent::Intent { slots, .. } = &mut self {
            slots.insert(slot.into(), value.into());
        }
        self
    }
}
