//! # elysium-registry
//!
//! Property and denomination registries for the Elysium overlay protocol.
//!
//! ## Role in System
//!
//! - **Property Registry**: authoritative mapping from property identifier
//!   to property metadata, with monotonic id assignment.
//! - **Denomination Registry**: per-property set of registered denomination
//!   values, enforcing uniqueness and the per-property capacity bound.
//! - **Ledger State**: the in-memory adapter owning both registries behind
//!   a reader-writer lock, handed to the validation engine by reference
//!   rather than reached through ambient globals.
//!
//! Validation traffic is read-mostly; the only mutations are property
//! creation and denomination registration driven by confirmed transactions.

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::*;
pub use domain::*;
pub use ports::*;
