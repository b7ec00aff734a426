//! Outbound response envelope.
//!
//! The container the skill-logic collaborator fills and the transport
//! collaborator serializes back to the platform. Directive builders live in
//! [`crate::protocol::audio`]; this module only owns the container and the
//! speech shapes.

use std::collections::HashMap;

use serde::Serialize;
use serde_json::Value;

use crate::protocol::audio::Directive;

/// Top-level outbound message.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseEnvelope {
    pub version: String,
    /// Attributes echoed back to the platform for the next invocation.
    /// Persistence across invocations is the collaborator's concern.
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub session_attributes: HashMap<String, Value>,
    pub response: Response,
}

impl ResponseEnvelope {
    pub fn new() -> Self {
        Self {
            version: "1.0".to_string(),
            session_attributes: HashMap::new(),
            response: Response::default(),
        }
    }
}

impl Default for ResponseEnvelope {
    fn default() -> Self {
        Self::new()
    }
}

/// Response body: optional speech plus an ordered directive sequence.
///
/// Directives execute on the device in append order. `should_end_session`
/// must stay `false` for playback started by a Play directive to continue.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_speech: Option<OutputSpeech>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub directives: Vec<Directive>,
    pub should_end_session: bool,
}

impl Response {
    /// Append a directive. All typed builders go through here, so the wire
    /// order is always the append order.
    pub fn add_directive(&mut self, directive: Directive) {
        self.directives.push(directive);
    }
}

/// Spoken output, either plain text or SSML.
#[derive(Debug, Clone, Serialize)]
pub struct OutputSpeech {
    #[serde(rename = "type")]
    pub speech_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ssml: Option<String>,
}

impl OutputSpeech {
    pub fn plain_text(text: impl Into<String>) -> Self {
        Self {
            speech_type: "PlainText".to_string(),
            text: Some(text.into()),
            ssml: None,
        }
    }

    pub fn ssml(ssml: impl Into<String>) -> Self {
        Self {
            speech_type: "SSML".to_string(),
            text: None,
            ssml: Some(ssml.into()),
        }
    }
}
