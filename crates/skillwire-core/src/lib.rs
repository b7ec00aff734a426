//! skillwire core: transport-agnostic request envelope and directive primitives.
//!
//! This crate defines the wire-level contracts shared by a skill's transport
//! handler and its business logic: the inbound request envelope with its typed
//! request variants, the request freshness check, and the outbound AudioPlayer
//! directive builders. It intentionally carries no transport or runtime
//! dependencies so it can be hosted behind any HTTP or Lambda front.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! All fallible paths must surface as `SkillWireError`/`Result` so hosting
//! processes do not crash on malformed platform traffic.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod error;
pub mod protocol;

/// Shared result type.
pub use error::{Result, SkillWireError};
