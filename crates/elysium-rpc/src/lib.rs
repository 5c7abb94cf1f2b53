//! # elysium-rpc
//!
//! Command surface for denomination payload construction.
//!
//! ## Role in System
//!
//! The wallet/RPC layer hands parameters in here as JSON values; this
//! crate is the strict parse-then-validate boundary. Numbers arrive as
//! integers or decimal strings, get parsed into typed identifiers at the
//! edge, and only typed values flow into the validation engine. Engine
//! rejections are translated to JSON-RPC errors with stable message
//! texts; transport and dispatch live elsewhere.

pub mod denomination;
pub mod error;
pub mod params;

pub use denomination::*;
pub use error::*;
