//! Directive builder and wire-shape tests.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use serde_json::{json, Value};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Registry;

use skillwire_core::protocol::audio::{ClearBehavior, Directive};
use skillwire_core::protocol::response::{OutputSpeech, Response, ResponseEnvelope};

/// Counts WARN events so the advisory diagnostics can be asserted on.
#[derive(Clone, Default)]
struct WarnCounter(Arc<AtomicUsize>);

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for WarnCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if *event.metadata().level() == tracing::Level::WARN {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn directives_serialize_in_append_order() {
    let mut response = Response::default();
    response.add_play_directive("REPLACE_ALL");
    response.add_clear_queue_directive("CLEAR_ENQUEUED");
    response.add_stop_directive();

    let value = serde_json::to_value(&response).unwrap();
    let directives = value["directives"].as_array().unwrap();
    assert_eq!(directives.len(), 3);
    assert_eq!(directives[0]["type"], "AudioPlayer.Play");
    assert_eq!(directives[1]["type"], "AudioPlayer.ClearQueue");
    assert_eq!(directives[2], json!({ "type": "AudioPlayer.Stop" }));
}

#[test]
fn clear_queue_recognized_behavior_is_silent() {
    let counter = WarnCounter::default();
    let warns = counter.0.clone();
    let subscriber = Registry::default().with(counter);

    tracing::subscriber::with_default(subscriber, || {
        let mut response = Response::default();
        response.add_clear_queue_directive(ClearBehavior::ClearAll.as_str());
        assert_eq!(warns.load(Ordering::SeqCst), 0);
    });
}

#[test]
fn clear_queue_unknown_behavior_warns_once_but_still_builds() {
    let counter = WarnCounter::default();
    let warns = counter.0.clone();
    let subscriber = Registry::default().with(counter);

    tracing::subscriber::with_default(subscriber, || {
        let mut response = Response::default();
        response.add_clear_queue_directive("BOGUS");
        assert_eq!(warns.load(Ordering::SeqCst), 1);

        // The directive is emitted with the caller-supplied value anyway.
        match response.directives.first() {
            Some(Directive::ClearQueue(directive)) => {
                assert_eq!(directive.clear_behavior, "BOGUS");
            }
            other => panic!("expected ClearQueue directive, got {other:?}"),
        }
    });
}

#[test]
fn clear_behavior_recognition() {
    assert_eq!(
        ClearBehavior::recognize("CLEAR_ENQUEUED"),
        Some(ClearBehavior::ClearEnqueued)
    );
    assert_eq!(
        ClearBehavior::recognize("CLEAR_ALL"),
        Some(ClearBehavior::ClearAll)
    );
    assert_eq!(ClearBehavior::recognize("BOGUS"), None);
    assert_eq!(ClearBehavior::ClearEnqueued.as_str(), "CLEAR_ENQUEUED");
}

#[test]
fn play_directive_stream_round_trips() {
    let mut envelope = ResponseEnvelope::new();
    envelope.response.should_end_session = false;
    envelope
        .response
        .add_play_directive("ENQUEUE")
        .set_audio_item_stream("https://x/a.mp3", "tok1", Some("tok0"), 1500);

    let value = serde_json::to_value(&envelope).unwrap();
    let stream = &value["response"]["directives"][0]["audioItem"]["stream"];
    assert_eq!(stream["url"], "https://x/a.mp3");
    assert_eq!(stream["token"], "tok1");
    assert_eq!(stream["expectedPreviousToken"], "tok0");
    assert_eq!(stream["offsetInMilliseconds"], 1500);

    // Re-parse the serialized directive and compare field by field.
    let directive: Directive =
        serde_json::from_value(value["response"]["directives"][0].clone()).unwrap();
    match directive {
        Directive::Play(play) => {
            assert_eq!(play.play_behavior, "ENQUEUE");
            assert_eq!(play.audio_item.stream.url, "https://x/a.mp3");
            assert_eq!(play.audio_item.stream.token, "tok1");
            assert_eq!(
                play.audio_item.stream.expected_previous_token.as_deref(),
                Some("tok0")
            );
            assert_eq!(play.audio_item.stream.offset_in_milliseconds, 1500);
        }
        other => panic!("expected Play directive, got {other:?}"),
    }
}

#[test]
fn stream_without_previous_token_omits_the_field() {
    let mut response = Response::default();
    response
        .add_play_directive("REPLACE_ALL")
        .set_audio_item_stream("https://x/b.mp3", "tok2", None, 0);

    let value = serde_json::to_value(&response).unwrap();
    let stream = value["directives"][0]["audioItem"]["stream"]
        .as_object()
        .unwrap();
    assert!(!stream.contains_key("expectedPreviousToken"));
}

#[test]
fn metadata_chaining_reaches_the_wire() {
    let mut response = Response::default();
    let play = response.add_play_directive("REPLACE_ALL");
    play.set_audio_item_stream("https://x/a.mp3", "tok1", None, 0);
    let metadata = play.set_audio_item_metadata("T", "S");
    metadata
        .set_art_image("desc")
        .add_source("https://img/a-small.png");
    metadata.set_background_image("bg-desc");

    let value = serde_json::to_value(&response).unwrap();
    let meta = &value["directives"][0]["audioItem"]["metadata"];
    assert_eq!(meta["title"], "T");
    assert_eq!(meta["subtitle"], "S");
    assert_eq!(meta["art"]["contentDescription"], "desc");
    assert_eq!(meta["art"]["sources"][0]["url"], "https://img/a-small.png");
    assert_eq!(meta["backgroundImage"]["contentDescription"], "bg-desc");
    // No sources attached to the background image, so the list is omitted.
    assert!(meta["backgroundImage"].get("sources").is_none());
}

#[test]
fn response_envelope_wire_shape() {
    let mut envelope = ResponseEnvelope::new();
    envelope.response.output_speech = Some(OutputSpeech::plain_text("Now playing jazz."));
    envelope.response.add_stop_directive();

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["version"], "1.0");
    // Empty attribute map stays off the wire.
    assert!(value.get("sessionAttributes").is_none());
    assert_eq!(value["response"]["shouldEndSession"], false);
    assert_eq!(
        value["response"]["outputSpeech"],
        json!({ "type": "PlainText", "text": "Now playing jazz." })
    );
}

#[test]
fn ssml_speech_wire_shape() {
    let speech = OutputSpeech::ssml("<speak>Hi</speak>");
    let value = serde_json::to_value(&speech).unwrap();
    assert_eq!(
        value,
        json!({ "type": "SSML", "ssml": "<speak>Hi</speak>" })
    );
}

#[test]
fn session_attributes_serialize_when_present() {
    let mut envelope = ResponseEnvelope::new();
    envelope
        .session_attributes
        .insert("station".to_string(), Value::String("jazz-24".to_string()));

    let value = serde_json::to_value(&envelope).unwrap();
    assert_eq!(value["sessionAttributes"]["station"], "jazz-24");
}
