//! Typed request variants and the discriminator-driven decoder.
//!
//! The envelope's raw payload resolves into exactly one [`Request`] variant
//! via the `type` discriminator. The mapping lives here, in the core, so
//! handling is exhaustiveness-checkable at the call site. Session and
//! context metadata are injected by reference: the envelope stays the
//! longest-lived owner and variants never copy them.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, SkillWireError};
use crate::protocol::envelope::{Context, RequestEnvelope, Session};

/// Wire fields shared by every request variant, flattened into each.
///
/// `timestamp` stays a raw string here: freshness parses it independently
/// (see [`crate::protocol::freshness`]), so an unparseable stamp fails the
/// freshness check rather than the decode.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestMeta {
    #[serde(rename = "type")]
    pub request_type: String,
    #[serde(default)]
    pub request_id: String,
    /// ISO-8601 instant, as sent by the platform.
    #[serde(default)]
    pub timestamp: String,
    #[serde(default)]
    pub locale: String,
}

/// Sent when the skill is started without a specific intent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LaunchRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
}

/// Sent when the user invokes an intent.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    pub intent: Intent,
    #[serde(default)]
    pub dialog_state: Option<String>,
}

/// Intent carried by an [`IntentRequest`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Intent {
    pub name: String,
    /// Slot name -> slot, order irrelevant.
    #[serde(default)]
    pub slots: HashMap<String, IntentSlot>,
    #[serde(default)]
    pub confirmation_status: String,
}

/// Single slot value inside an intent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntentSlot {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub confirmation_status: String,
    /// Entity resolution block, opaque to this core.
    #[serde(default)]
    pub resolutions: Option<Value>,
}

/// Sent when the session ends (user exit, error, or timeout).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SessionEndedRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    /// "USER_INITIATED", "ERROR", or "EXCEEDED_MAX_REPROMPTS".
    #[serde(default)]
    pub reason: String,
    #[serde(default)]
    pub error: Option<ErrorPayload>,
}

/// Sent when a directive this skill issued failed on the platform side.
/// Any directives included in the response are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SystemExceptionEncounteredRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    pub error: ErrorPayload,
    #[serde(default)]
    pub cause: ExceptionCause,
}

/// Reference to the request whose directive caused the exception.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExceptionCause {
    #[serde(default)]
    pub request_id: String,
}

/// AudioPlayer lifecycle notification (PlaybackStarted, PlaybackFinished,
/// PlaybackStopped, PlaybackNearlyFinished). Carries no session on the
/// wire; the envelope injects a defaulted one.
/// Responses to these must contain AudioPlayer directives or nothing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerRequest {
    #[serde(flatten)]
    pub meta: RequestMeta,
    /// Token of the stream the notification refers to.
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub offset_in_milliseconds: u64,
}

/// Sent when the platform fails to play a stream.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerPlaybackFailedRequest {
    #[serde(flatten)]
    pub base: AudioPlayerRequest,
    pub error: ErrorPayload,
    #[serde(default)]
    pub current_playback_state: PlaybackState,
}

/// Device playback state snapshot carried by a playback failure.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlaybackState {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub offset_in_milliseconds: u64,
    #[serde(default)]
    pub player_activity: String,
}

/// Error block shared by the error-carrying variants.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ErrorPayload {
    #[serde(rename = "type", default)]
    pub error_type: String,
    #[serde(default)]
    pub message: String,
}

/// A request payload resolved to its concrete variant.
#[derive(Debug, Clone, PartialEq)]
pub enum Request {
    Launch(LaunchRequest),
    Intent(IntentRequest),
    SessionEnded(SessionEndedRequest),
    ExceptionEncountered(SystemExceptionEncounteredRequest),
    /// Any of the four AudioPlayer lifecycle notifications.
    AudioPlayer(AudioPlayerRequest),
    PlaybackFailed(AudioPlayerPlaybackFailedRequest),
}

/// A decoded request together with the envelope metadata it shares.
///
/// `session` and `context` borrow from the envelope, so they are non-null
/// by construction and equal by value to the envelope's own fields.
#[derive(Debug)]
pub struct DecodedRequest<'envelope> {
    pub session: &'envelope Session,
    pub context: &'envelope Context,
    pub request: Request,
}

#[derive(Deserialize)]
struct DiscriminatorProbe {
    #[serde(rename = "type")]
    request_type: String,
}

impl RequestEnvelope {
    /// Resolve the raw request payload into its typed variant and attach
    /// the envelope's session and context by reference.
    ///
    /// Shape mismatches surface as [`SkillWireError::MalformedPayload`]
    /// with no partially decoded request; unknown discriminators as
    /// [`SkillWireError::UnrecognizedRequestType`].
    pub fn decode(&self) -> Result<DecodedRequest<'_>> {
        let raw = self.request.get();
        let probe: DiscriminatorProbe = serde_json::from_str(raw)?;

        let request = match probe.request_type.as_str() {
            "LaunchRequest" => Request::Launch(serde_json::from_str(raw)?),
            "IntentRequest" => Request::Intent(serde_json::from_str(raw)?),
            "SessionEndedRequest" => Request::SessionEnded(serde_json::from_str(raw)?),
            "System.ExceptionEncountered" => {
                Request::ExceptionEncountered(serde_json::from_str(raw)?)
            }
            "AudioPlayer.PlaybackFailed" => Request::PlaybackFailed(serde_json::from_str(raw)?),
            "AudioPlayer.PlaybackStarted"
            | "AudioPlayer.PlaybackFinished"
            | "AudioPlayer.PlaybackStopped"
            | "AudioPlayer.PlaybackNearlyFinished" => {
                Request::AudioPlayer(serde_json::from_str(raw)?)
            }
            other => return Err(SkillWireError::UnrecognizedRequestType(other.to_string())),
        };

        Ok(DecodedRequest {
            session: &self.session,
            context: &self.context,
            request,
        })
    }

    /// Deserialize the raw request payload into a caller-chosen shape.
    ///
    /// Escape hatch for request types [`decode`](Self::decode) does not
    /// map; keeps the core forward-compatible with new platform payloads.
    pub fn request_as<T: DeserializeOwned>(&self) -> Result<T> {
        Ok(serde_json::from_str(self.request.get())?)
    }
}
