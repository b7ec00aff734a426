//! Shared error type across skillwire crates.

use thiserror::Error;

/// Shared result type.
pub type Result<T> = std::result::Result<T, SkillWireError>;

/// Unified error type used by envelope decoding.
#[derive(Debug, Error)]
pub enum SkillWireError {
    /// The request payload did not match the expected variant shape.
    /// No partially decoded request escapes this failure.
    #[error("malformed request payload: {0}")]
    MalformedPayload(#[from] serde_json::Error),

    /// The payload's `type` discriminator is not known to the decoder.
    /// The offending value is carried so the caller can log or route it.
    #[error("unrecognized request type: {0}")]
    UnrecognizedRequestType(String),
}
