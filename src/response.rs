//! Response builder
//!
//! Pure constructors for every reply the skill can give. Nothing here does
//! I/O; the dialog layer decides which one to use.

use serde::Serialize;

pub const GREETING: &str = "Hi, I'm Nerdy Joker. Ask me for a nerdy joke.";
pub const HELP: &str =
    "You can ask me for a nerdy joke by saying \"Tell me a joke\". Do you want a joke now?";
pub const FAREWELL: &str = "Alright, have a nice day!";
pub const FALLBACK: &str = "I'm sorry, I didn't get that. Can you say that again?";
/// Card title wrapped around a delivered joke
pub const JOKE_CARD_TITLE: &str = "Nerdy Joke";

/// Where the conversation stands after this response.
///
/// Only ever an annotation on the outgoing reply. The next turn is routed from
/// its own slots, never from a stored state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogState {
    #[default]
    Idle,
    AwaitingWantConfirmation,
}

/// Visual card shown next to the spoken reply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub title: String,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DialogResponse {
    pub speech_text: String,
    pub end_session: bool,
    pub card: Option<Card>,
    pub state: DialogState,
}

impl DialogResponse {
    fn speak(text: &str, end_session: bool) -> Self {
        Self {
            speech_text: text.to_string(),
            end_session,
            card: None,
            state: DialogState::Idle,
        }
    }

    pub fn greeting() -> Self {
        Self::speak(GREETING, false)
    }

    pub fn help() -> Self {
        Self {
            state: DialogState::AwaitingWantConfirmation,
            ..Self::speak(HELP, false)
        }
    }

    pub fn farewell() -> Self {
        Self::speak(FAREWELL, true)
    }

    pub fn fallback() -> Self {
        Self::speak(FALLBACK, false)
    }

    /// Speak a joke verbatim and close the session.
    ///
    /// Blank content would break the non-empty speech guarantee, so it
    /// degrades to the fallback reply.
    pub fn joke(content: &str) -> Self {
        if content.trim().is_empty() {
            return Self::fallback();
        }
        Self {
            speech_text: content.to_string(),
            end_session: true,
            card: Some(Card {
                title: JOKE_CARD_TITLE.to_string(),
                body: content.to_string(),
            }),
            state: DialogState::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_flags() {
        assert!(!DialogResponse::greeting().end_session);
        assert!(!DialogResponse::help().end_session);
        assert!(!DialogResponse::fallback().end_session);
        assert!(DialogResponse::farewell().end_session);
        assert!(DialogResponse::joke("a joke").end_session);
    }

    #[test]
    fn test_greeting_text() {
        let resp = DialogResponse::greeting();
        assert_eq!(resp.speech_text, "Hi, I'm Nerdy Joker. Ask me for a nerdy joke.");
        assert_eq!(resp.card, None);
    }

    #[test]
    fn test_help_awaits_confirmation() {
        assert_eq!(DialogResponse::help().state, DialogState::AwaitingWantConfirmation);
        assert_eq!(DialogResponse::greeting().state, DialogState::Idle);
    }

    #[test]
    fn test_joke_is_verbatim_with_card() {
        let text = "The first rule of tautology club is the first rule of tautology club.";
        let resp = DialogResponse::joke(text);

        assert_eq!(resp.speech_text, text);
        let card = resp.card.unwrap();
        assert_eq!(card.title, JOKE_CARD_TITLE);
        assert_eq!(card.body, text);
    }

    #[test]
    fn test_blank_joke_falls_back() {
        assert_eq!(DialogResponse::joke("   "), DialogResponse::fallback());
    }
}
