//! Registry configuration and re-exported shared entities.

// Re-export from elysium-types for convenience
pub use elysium_types::{
    DenominationIndex, DenominationValue, Property, PropertyId, SigmaStatus,
};

use serde::{Deserialize, Serialize};

/// Registry configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistryConfig {
    /// Maximum denominations one property may hold. Denominations are
    /// addressed on the wire by a single byte, so this never exceeds 255.
    pub max_denominations_per_property: usize,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            max_denominations_per_property: 255,
        }
    }
}

impl RegistryConfig {
    /// Creates a minimal config for testing.
    pub fn for_testing() -> Self {
        Self {
            max_denominations_per_property: 4,
        }
    }
}
