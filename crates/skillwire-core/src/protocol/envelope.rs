//! Inbound request envelope (JSON).
//!
//! The core stores `request` as `RawValue` to enable lazy parsing: the
//! discriminator probe, the freshness check, and variant decoding each read
//! the raw payload independently. Platform-owned sub-objects deserialize
//! leniently (`#[serde(default)]`, no `deny_unknown_fields`) because the
//! platform adds fields at will and omits `session` entirely on
//! AudioPlayer-interface requests.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::value::RawValue;
use serde_json::Value;

/// Top-level inbound message wrapping session, context, and request payload.
#[derive(Debug, Deserialize)]
pub struct RequestEnvelope {
    /// Protocol version.
    pub version: String,
    /// Session metadata. Defaulted when the wire omits it so injected
    /// references are never null.
    #[serde(default)]
    pub session: Session,
    /// Platform and device state at request time.
    #[serde(default)]
    pub context: Context,
    /// Request payload, stored as raw JSON (lazy parsing).
    pub request: Box<RawValue>,
}

/// Session object carried by standard request types. One per skill
/// invocation sequence; read-only to this core.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    /// True on the first request of a new session.
    #[serde(rename = "new", default)]
    pub is_new: bool,
    #[serde(default)]
    pub session_id: String,
    /// Free-form attribute mapping, persisted by the collaborator (not here).
    #[serde(default)]
    pub attributes: HashMap<String, Value>,
    #[serde(default)]
    pub application: Application,
    #[serde(default)]
    pub user: User,
}

/// Owning application identity.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    #[serde(default)]
    pub application_id: String,
}

/// Platform user, with an access token when the account is linked.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Snapshot of platform service and device state at request time.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Context {
    #[serde(rename = "System", default)]
    pub system: System,
    #[serde(rename = "audioPlayer", default)]
    pub audio_player: AudioPlayerState,
}

/// Current state of the platform service and the requesting device.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct System {
    #[serde(default)]
    pub api_access_token: String,
    #[serde(default)]
    pub api_endpoint: String,
    #[serde(default)]
    pub application: Application,
    #[serde(default)]
    pub device: Device,
    #[serde(default)]
    pub user: User,
}

/// Device that sent the request.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Device {
    #[serde(default)]
    pub device_id: String,
    /// Interface name -> capability object, opaque to this core.
    #[serde(default)]
    pub supported_interfaces: HashMap<String, Value>,
}

/// Device-side audio player state reported in the context.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioPlayerState {
    /// Token of the stream currently loaded, if any.
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub offset_in_milliseconds: Option<u64>,
    /// Playback activity, e.g. "PLAYING", "PAUSED", "IDLE".
    #[serde(default)]
    pub player_activity: String,
}
