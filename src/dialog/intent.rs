//! Known intents and the name lookup table

use std::fmt;

/// Slot carrying the answer to "Do you want a joke now?"
pub const WANT_SLOT: &str = "Want";

/// Acknowledgement words that count as "yes", compared lowercased
pub const AFFIRMATIVES: &[&str] = &["yes", "sure", "yeah", "yep", "ok", "okay"];

/// The closed set of intents this skill handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    TellJoke,
    Help,
    ConfirmationReply,
}

/// Intent name → intent. Includes the platform's original names.
const INTENT_TABLE: &[(&str, Intent)] = &[
    ("TellJoke", Intent::TellJoke),
    ("TellANerdyJoke", Intent::TellJoke),
    ("HelpIntent", Intent::Help),
    ("AMAZON.HelpIntent", Intent::Help),
    ("ConfirmationReply", Intent::ConfirmationReply),
    ("HelpReply", Intent::ConfirmationReply),
];

impl Intent {
    /// Resolve an intent name; names are matched exactly
    pub fn lookup(name: &str) -> Option<Intent> {
        INTENT_TABLE
            .iter()
            .find(|(known, _)| *known == name)
            .map(|(_, intent)| *intent)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::TellJoke => "TellJoke",
            Intent::Help => "HelpIntent",
            Intent::ConfirmationReply => "ConfirmationReply",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Case-insensitive membership in [`AFFIRMATIVES`]
pub fn is_affirmative(value: &str) -> bool {
    let value = value.trim().to_lowercase();
    AFFIRMATIVES.contains(&value.as_str())
}
