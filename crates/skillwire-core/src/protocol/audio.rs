//! AudioPlayer directive set and builders.
//!
//! Builders are attach-and-configure: each appends a directive to the
//! response and returns it (or a nested sub-object) for further
//! configuration. Validation stays advisory — the platform accepts enum
//! values this core may not know yet, so unrecognized values are warned
//! about and passed through unchanged.

use serde::{Deserialize, Serialize};

use crate::protocol::response::Response;

/// Outbound directive, tagged by `type` on the wire. Executed on the
/// device in sequence order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Directive {
    #[serde(rename = "AudioPlayer.Play")]
    Play(PlayDirective),
    #[serde(rename = "AudioPlayer.Stop")]
    Stop,
    #[serde(rename = "AudioPlayer.ClearQueue")]
    ClearQueue(ClearQueueDirective),
}

/// Commands the device to stream an audio item.
///
/// `play_behavior` is an unvalidated pass-through; the platform recognizes
/// "REPLACE_ALL", "ENQUEUE", and "REPLACE_ENQUEUED" today but the set is
/// open-ended.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayDirective {
    pub play_behavior: String,
    pub audio_item: AudioItem,
}

/// The audio item a Play directive carries.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItem {
    pub stream: Stream,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<AudioItemMetadata>,
}

/// Stream descriptor inside an audio item.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Stream {
    pub url: String,
    pub token: String,
    /// Token of the previously playing stream; links the new stream to it
    /// for gapless queueing. Omitted from the wire when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expected_previous_token: Option<String>,
    pub offset_in_milliseconds: u64,
}

/// Display metadata for the audio item on screen-bearing devices.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AudioItemMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subtitle: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub art: Option<ImageObject>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_image: Option<ImageObject>,
}

/// Image descriptor with a content description and source variants.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_description: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub sources: Vec<ImageSource>,
}

/// One source variant of an image.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImageSource {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width_pixels: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height_pixels: Option<u32>,
}

/// Clears the device's playback queue.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClearQueueDirective {
    pub clear_behavior: String,
}

/// Recognized clear behaviors for the ClearQueue directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClearBehavior {
    /// Clear the queue without stopping the current stream.
    ClearEnqueued,
    /// Clear the queue and stop the current stream.
    ClearAll,
}

impl ClearBehavior {
    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            ClearBehavior::ClearEnqueued => "CLEAR_ENQUEUED",
            ClearBehavior::ClearAll => "CLEAR_ALL",
        }
    }

    /// Structured validation: `None` means the value is not one this core
    /// recognizes. Callers decide whether that is worth a diagnostic.
    pub fn recognize(value: &str) -> Option<Self> {
        match value {
            "CLEAR_ENQUEUED" => Some(ClearBehavior::ClearEnqueued),
            "CLEAR_ALL" => Some(ClearBehavior::ClearAll),
            _ => None,
        }
    }
}

impl Response {
    /// Append a Play directive and return it for stream/metadata
    /// configuration.
    pub fn add_play_directive(&mut self, play_behavior: impl Into<String>) -> &mut PlayDirective {
        self.add_directive(Directive::Play(PlayDirective {
            play_behavior: play_behavior.into(),
            audio_item: AudioItem::default(),
        }));
        match self.directives.last_mut() {
            Some(Directive::Play(directive)) => directive,
            _ => unreachable!("a Play directive was just appended"),
        }
    }

    /// Append a parameterless Stop directive.
    pub fn add_stop_directive(&mut self) {
        self.add_directive(Directive::Stop);
    }

    /// Append a ClearQueue directive.
    ///
    /// Unrecognized `clear_behavior` values draw a single warning but are
    /// still passed through, so new platform-side values keep working.
    pub fn add_clear_queue_directive(
        &mut self,
        clear_behavior: impl Into<String>,
    ) -> &mut ClearQueueDirective {
        let clear_behavior = clear_behavior.into();
        if ClearBehavior::recognize(&clear_behavior).is_none() {
            tracing::warn!(%clear_behavior, "unrecognized clearBehavior for ClearQueue directive");
        }
        self.add_directive(Directive::ClearQueue(ClearQueueDirective { clear_behavior }));
        match self.directives.last_mut() {
            Some(Directive::ClearQueue(directive)) => directive,
            _ => unreachable!("a ClearQueue directive was just appended"),
        }
    }
}

impl PlayDirective {
    /// Set the stream attributes for this directive's audio item.
    pub fn set_audio_item_stream(
        &mut self,
        url: impl Into<String>,
        token: impl Into<String>,
        expected_previous_token: Option<&str>,
        offset_in_milliseconds: u64,
    ) -> &mut Self {
        self.audio_item.stream = Stream {
            url: url.into(),
            token: token.into(),
            expected_previous_token: expected_previous_token.map(str::to_owned),
            offset_in_milliseconds,
        };
        self
    }

    /// Attach display metadata to this directive's audio item and return it
    /// for image configuration.
    pub fn set_audio_item_metadata(
        &mut self,
        title: impl Into<String>,
        subtitle: impl Into<String>,
    ) -> &mut AudioItemMetadata {
        self.audio_item.metadata.insert(AudioItemMetadata {
            title: Some(title.into()),
            subtitle: Some(subtitle.into()),
            art: None,
            background_image: None,
        })
    }
}

impl AudioItemMetadata {
    /// Set the art image and return it so sources can be attached.
    pub fn set_art_image(&mut self, content_description: impl Into<String>) -> &mut ImageObject {
        self.art.insert(ImageObject {
            content_description: Some(content_description.into()),
            sources: Vec::new(),
        })
    }

    /// Set the background image and return it so sources can be attached.
    pub fn set_background_image(
        &mut self,
        content_description: impl Into<String>,
    ) -> &mut ImageObject {
        self.background_image.insert(ImageObject {
            content_description: Some(content_description.into()),
            sources: Vec::new(),
        })
    }
}

impl ImageObject {
    /// Append a source variant by url.
    pub fn add_source(&mut self, url: impl Into<String>) -> &mut Self {
        self.sources.push(ImageSource {
            url: url.into(),
            size: None,
            width_pixels: None,
            height_pixels: None,
        });
        self
    }
}
