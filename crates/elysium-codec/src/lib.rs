//! # elysium-codec
//!
//! Binary wire-format codec for Elysium overlay-protocol payloads.
//!
//! Every payload opens with a fixed four-byte header: a two-byte message
//! class followed by a two-byte message type, both big-endian. The fields
//! that follow are fixed-width big-endian integers with no length
//! prefixes; variable-length text fields are NUL-terminated.
//!
//! The codec is a pure, stateless transform. It performs no semantic
//! validation (property existence, feature flags, uniqueness) — those
//! checks belong to the validation engine, which calls in here only after
//! a request has been accepted.

pub mod decode;
pub mod encode;
pub mod error;
pub mod types;

pub use decode::*;
pub use encode::*;
pub use error::*;
pub use types::*;
