//! Skill request and response envelopes

use crate::dialog::{ConversationEvent, Slots};
use crate::response::{DialogResponse, DialogState};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const LAUNCH_REQUEST: &str = "LaunchRequest";
pub const INTENT_REQUEST: &str = "IntentRequest";

/// Request envelope posted by the voice platform
#[derive(Debug, Deserialize)]
pub struct SkillRequest {
    #[allow(dead_code)] // Part of the wire format
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub session: Option<SkillSession>,
    pub request: SkillRequestBody,
}

#[derive(Debug, Deserialize)]
pub struct SkillSession {
    #[serde(default)]
    pub application: Option<SkillApplication>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillApplication {
    pub application_id: String,
}

#[derive(Debug, Deserialize)]
pub struct SkillRequestBody {
    #[serde(rename = "type", default)]
    pub request_type: String,
    #[serde(default)]
    pub intent: Option<SkillIntent>,
}

#[derive(Debug, Deserialize)]
pub struct SkillIntent {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub slots: HashMap<String, SkillSlot>,
}

#[derive(Debug, Deserialize)]
pub struct SkillSlot {
    #[allow(dead_code)] // Part of the wire format
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub value: Option<String>,
}

impl SkillRequest {
    pub fn application_id(&self) -> Option<&str> {
        self.session
            .as_ref()?
            .application
            .as_ref()
            .map(|app| app.application_id.as_str())
    }

    /// Classify the envelope once, at the boundary.
    ///
    /// A request without a type, or an intent without a name, is unknown. A
    /// slot sent without a value reads as an empty reply; only a slot the
    /// platform left out entirely reads as missing.
    pub fn into_event(self) -> ConversationEvent {
        match (self.request.request_type.as_str(), self.request.intent) {
            (LAUNCH_REQUEST, _) => ConversationEvent::Launch,
            (INTENT_REQUEST, Some(intent)) if !intent.name.is_empty() => {
                let slots: Slots = intent
                    .slots
                    .into_iter()
                    .map(|(name, slot)| (name, slot.value.unwrap_or_default()))
                    .collect();
                ConversationEvent::Intent {
                    name: intent.name,
                    slots,
                }
            }
            _ => ConversationEvent::Unknown,
        }
    }
}

/// Response envelope returned to the voice platform
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponse {
    pub version: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_attributes: Option<SessionAttributes>,
    pub response: SkillResponseBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionAttributes {
    pub dialog_state: DialogState,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkillResponseBody {
    pub output_speech: OutputSpeech,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<SkillCard>,
    pub should_end_session: bool,
}

#[derive(Debug, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: &'static str,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct SkillCard {
    #[serde(rename = "type")]
    pub card_type: &'static str,
    pub title: String,
    pub content: String,
}

impl From<DialogResponse> for SkillResponse {
    fn from(resp: DialogResponse) -> Self {
        let session_attributes = match resp.state {
            DialogState::Idle => None,
            state => Some(SessionAttributes {
                dialog_state: state,
            }),
        };

        Self {
            version: "1.0",
            session_attributes,
            response: SkillResponseBody {
                output_speech: OutputSpeech {
                    speech_type: "PlainText",
                    text: resp.speech_text,
                },
                card: resp.card.map(|card| SkillCard {
                    card_type: "Simple",
                    title: card.title,
                    content: card.body,
                }),
                should_end_session: resp.end_session,
            },
        }
    }
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            error: message.into(),
        }
    }
}
