//! # elysium-engine
//!
//! Validation engine for denomination-management operations.
//!
//! ## Role in System
//!
//! - **Payload creation** ([`create_denomination`]): runs the consensus
//!   acceptance checks against the registries and, only on full success,
//!   asks the codec for the transaction-ready bytes. Never mutates.
//! - **Payload application** ([`apply_create_denomination`]): the path a
//!   confirmed transaction takes — decode the embedded payload, then
//!   register the denomination on the ledger.
//!
//! The split keeps payload construction side-effect free: a wallet may
//! build the same payload any number of times, and registry state changes
//! only when the surrounding ledger confirms the transaction carrying it.

pub mod apply;
pub mod engine;
pub mod error;

pub use apply::*;
pub use engine::*;
pub use error::*;
