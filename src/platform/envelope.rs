use crate::kernel::error::SkillError;
use crate::kernel::request::{
    Request, Slots, INTENT_REQUEST, LAUNCH_REQUEST, SESSION_ENDED_REQUEST,
};
use crate::kernel::response::Response;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const RESPONSE_VERSION: &str = "1.0";

/// Inbound JSON envelope as posted by the voice platform. Session and context
/// are kept opaque; nothing in the skill reads them.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestEnvelope {
    #[serde(default)]
    pub version: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub session: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<serde_json::Value>,
    pub request: PlatformRequest,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub request_id: Option<String>,
    pub timestamp: Option<String>,
    pub locale: Option<String>,
    pub intent: Option<IntentPayload>,
    /// Only on `SessionEndedRequest`.
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentPayload {
    pub name: String,
    #[serde(default)]
    pub slots: BTreeMap<String, SlotPayload>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotPayload {
    pub name: Option<String>,
    /// Absent when the user did not fill the slot.
    pub value: Option<String>,
}

impl PlatformRequest {
    /// Strips the envelope down to what the registry matches on. Unfilled
    /// slots are dropped so handlers see them as missing.
    pub fn to_request(&self) -> Result<Request, SkillError> {
        match self.kind.as_str() {
            LAUNCH_REQUEST => Ok(Request::Launch),
            INTENT_REQUEST => {
                let intent = self.intent.as_ref().ok_or_else(|| {
                    SkillError::UnsupportedRequest("IntentRequest without an intent".to_string())
                })?;
                let slots: Slots = intent
                    .slots
                    .iter()
                    .filter_map(|(name, slot)| Some((name.clone(), slot.value.clone()?)))
                    .collect();
                Ok(Request::Intent {
                    name: intent.name.clone(),
                    slots,
                })
            }
            SESSION_ENDED_REQUEST => Ok(Request::SessionEnded {
                reason: self.reason.clone(),
            }),
            other => Err(SkillError::UnsupportedRequest(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum OutputSpeech {
    #[serde(rename = "SSML")]
    Ssml { ssml: String },
    PlainText { text: String },
}

impl OutputSpeech {
    /// Wraps text in `<speak>`, escaping the characters SSML rejects.
    pub fn ssml(text: &str) -> Self {
        let mut escaped = String::with_capacity(text.len());
        for c in text.chars() {
            match c {
                '&' => escaped.push_str("&amp;"),
                '<' => escaped.push_str("&lt;"),
                '>' => escaped.push_str("&gt;"),
                _ => escaped.push(c),
            }
        }
        OutputSpeech::Ssml {
            ssml: format!("<speak>{}</speak>", escaped),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Reprompt {
    pub output_speech: OutputSpeech,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reprompt: Option<Reprompt>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub should_end_session: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    pub response: ResponseBody,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,
}

impl ResponseEnvelope {
    pub fn from_response(response: &Response, user_agent: Option<String>) -> Self {
        Self {
            version: RESPONSE_VERSION.to_string(),
            response: ResponseBody {
                output_speech: response.speech.as_deref().map(OutputSpeech::ssml),
                reprompt: response.reprompt.as_deref().map(|text| Reprompt {
                    output_speech: OutputSpeech::ssml(text),
                }),
                should_end_session: response.should_end_session,
            },
            user_agent,
        }
    }
}
