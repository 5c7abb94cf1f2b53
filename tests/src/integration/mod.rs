//! Cross-crate integration flows.

pub mod acceptance;
pub mod concurrency;
