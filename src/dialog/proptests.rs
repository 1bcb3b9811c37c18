//! Property-based tests for the dialog router
//!
//! These tests verify key invariants hold across all possible inputs.

use super::event::{ConversationEvent, Slots};
use super::intent::{AFFIRMATIVES, WANT_SLOT};
use super::route::{route, Action, RouteError};
use super::Dialog;
use crate::corpus::testing::{FailingJokeStore, InMemoryJokeStore};
use crate::corpus::{JokeStore, NERDY_JOKES};
use crate::response::DialogResponse;
use proptest::prelude::*;
use std::sync::Arc;

// ============================================================================
// Arbitrary Generators
// ============================================================================

fn arb_intent_name() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("TellJoke".to_string()),
        Just("TellANerdyJoke".to_string()),
        Just("HelpIntent".to_string()),
        Just("AMAZON.HelpIntent".to_string()),
        Just("ConfirmationReply".to_string()),
        Just("HelpReply".to_string()),
        "[A-Za-z.]{0,20}",
    ]
}

fn arb_slots() -> impl Strategy<Value = Slots> {
    let name = prop_oneof![Just(WANT_SLOT.to_string()), "[A-Za-z]{1,8}"];
    let value = prop_oneof![
        Just("yes".to_string()),
        Just("sure".to_string()),
        Just("no".to_string()),
        ".{0,12}",
    ];
    proptest::collection::hash_map(name, value, 0..4)
}

fn arb_event() -> impl Strategy<Value = ConversationEvent> {
    prop_oneof![
        Just(ConversationEvent::Launch),
        Just(ConversationEvent::Unknown),
        (arb_intent_name(), arb_slots())
            .prop_map(|(name, slots)| ConversationEvent::Intent { name, slots }),
    ]
}

/// Random capitalization of an affirmative word
fn arb_affirmative() -> impl Strategy<Value = String> {
    (
        proptest::sample::select(AFFIRMATIVES.to_vec()),
        proptest::collection::vec(any::<bool>(), 8),
    )
        .prop_map(|(word, upper)| {
            word.chars()
                .zip(upper.iter().cycle())
                .map(|(c, up)| if *up { c.to_ascii_uppercase() } else { c })
                .collect::<String>()
        })
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

fn dispatch_with(store: Arc<dyn JokeStore>, event: ConversationEvent) -> DialogResponse {
    block_on(Dialog::new(store).dispatch(&event))
}

// ============================================================================
// Properties
// ============================================================================

proptest! {
    #[test]
    fn prop_route_is_total(event in arb_event()) {
        // Either an action or a recoverable routing error; never a panic
        let _ = route(&event);
    }

    #[test]
    fn prop_dispatch_always_speaks(event in arb_event()) {
        let store = Arc::new(InMemoryJokeStore::with_jokes(&NERDY_JOKES));
        let resp = dispatch_with(store, event);
        prop_assert!(!resp.speech_text.trim().is_empty());
    }

    #[test]
    fn prop_dispatch_speaks_even_when_store_fails(event in arb_event()) {
        let resp = dispatch_with(Arc::new(FailingJokeStore), event);
        prop_assert!(!resp.speech_text.trim().is_empty());
    }

    #[test]
    fn prop_session_closes_only_for_joke_or_farewell(event in arb_event()) {
        let store = Arc::new(InMemoryJokeStore::with_jokes(&NERDY_JOKES));
        let resp = dispatch_with(store, event.clone());
        match route(&event) {
            Ok(Action::TellJoke | Action::Farewell) => prop_assert!(resp.end_session),
            _ => prop_assert!(!resp.end_session),
        }
    }

    #[test]
    fn prop_affirmatives_any_case_tell_joke(want in arb_affirmative()) {
        let event = ConversationEvent::intent("ConfirmationReply").with_slot(WANT_SLOT, want);
        prop_assert_eq!(route(&event), Ok(Action::TellJoke));
    }

    #[test]
    fn prop_non_affirmatives_say_farewell(want in "[a-z]{0,10}") {
        prop_assume!(!AFFIRMATIVES.contains(&want.as_str()));
        let event = ConversationEvent::intent("ConfirmationReply").with_slot(WANT_SLOT, want);
        prop_assert_eq!(route(&event), Ok(Action::Farewell));
    }

    #[test]
    fn prop_unknown_names_are_unknown_intents(name in "[a-z]{1,12}") {
        // Known intent names all start with an uppercase letter
        let event = ConversationEvent::intent(name.clone());
        prop_assert_eq!(route(&event), Err(RouteError::UnknownIntent(name)));
    }
}
