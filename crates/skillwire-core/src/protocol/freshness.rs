//! Request timestamp freshness check (replay guard).
//!
//! Validation returns a structured [`Freshness`] verdict instead of logging;
//! the caller decides policy and diagnostics. The check reads the raw
//! payload directly so it works before (and independently of) variant
//! decoding.

use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;

use crate::protocol::envelope::RequestEnvelope;

/// Maximum accepted request age, in seconds. Requests at or past this age
/// are considered replays.
pub const MAX_REQUEST_AGE_SECS: i64 = 30;

/// Verdict of the freshness check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Freshness {
    /// Request age is strictly under the tolerance.
    Fresh,
    /// Request is too old. `age` is how far in the past the timestamp lies.
    Stale { age: Duration },
    /// The payload carried no parseable timestamp. Treated as not fresh.
    Invalid { reason: String },
}

impl Freshness {
    pub fn is_fresh(&self) -> bool {
        matches!(self, Freshness::Fresh)
    }
}

#[derive(Deserialize)]
struct TimestampProbe {
    #[serde(default)]
    timestamp: Option<String>,
}

/// Check the envelope's request timestamp against the current clock.
pub fn check(envelope: &RequestEnvelope) -> Freshness {
    check_at(envelope, Utc::now())
}

/// Clock-injectable form of [`check`].
pub fn check_at(envelope: &RequestEnvelope, now: DateTime<Utc>) -> Freshness {
    let probe: TimestampProbe = match serde_json::from_str(envelope.request.get()) {
        Ok(probe) => probe,
        Err(err) => {
            return Freshness::Invalid {
                reason: format!("request payload is not an object: {err}"),
            }
        }
    };

    let Some(timestamp) = probe.timestamp else {
        return Freshness::Invalid {
            reason: "request payload has no timestamp".to_string(),
        };
    };

    let parsed = match DateTime::parse_from_rfc3339(&timestamp) {
        Ok(parsed) => parsed.with_timezone(&Utc),
        Err(err) => {
            return Freshness::Invalid {
                reason: format!("unparseable timestamp {timestamp:?}: {err}"),
            }
        }
    };

    // Negative age (future stamp) counts as fresh, same as the platform.
    let age = now - parsed;
    if age < Duration::seconds(MAX_REQUEST_AGE_SECS) {
        Freshness::Fresh
    } else {
        Freshness::Stale { age }
    }
}

/// Boolean convenience over [`check`] for callers that only gate on the
/// verdict.
pub fn is_fresh(envelope: &RequestEnvelope) -> bool {
    check(envelope).is_fresh()
}
