//! Protocol modules (inbound envelope + outbound directives).
//!
//! This module hosts both halves of the skill wire protocol:
//! - Inbound: the request envelope, its typed request variants, and the
//!   timestamp freshness check.
//! - Outbound: the response container and the AudioPlayer directive set.
//!
//! All decoding is panic-free: malformed input is reported as
//! `SkillWireError` instead of panicking, keeping the hosting process
//! resilient to hostile or future platform traffic.

pub mod audio;
pub mod envelope;
pub mod freshness;
pub mod request;
pub mod response;
