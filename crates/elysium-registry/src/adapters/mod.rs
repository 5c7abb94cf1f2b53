//! Adapters: concrete registry state implementations.

pub mod memory;

pub use memory::*;
