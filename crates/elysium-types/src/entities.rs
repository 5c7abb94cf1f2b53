//! Core domain entities for the Elysium overlay protocol.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of a registered property (token) on the overlay ledger.
///
/// Assigned monotonically at property creation, never reused or mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PropertyId(u32);

impl PropertyId {
    /// Wraps a raw 32-bit property identifier.
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    /// Returns the raw 32-bit identifier.
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl From<u32> for PropertyId {
    fn from(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for PropertyId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A denomination amount registered for a Sigma-enabled property.
///
/// Unique within the owning property's denomination set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DenominationValue(u64);

impl DenominationValue {
    /// Wraps a raw 64-bit denomination amount.
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw 64-bit amount.
    pub const fn raw(self) -> u64 {
        self.0
    }

    /// Returns true for the zero amount, which is never a valid denomination.
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl From<u64> for DenominationValue {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for DenominationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of a denomination within its property's set.
///
/// Denominations are referenced on the wire by a single byte, which bounds
/// the per-property set size.
pub type DenominationIndex = u8;

/// Sigma feature status of a property.
///
/// Soft states may be toggled by the issuer later; hard states are final.
/// Set at property creation and immutable for the lifetime of this engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SigmaStatus {
    SoftDisabled,
    SoftEnabled,
    HardDisabled,
    HardEnabled,
}

impl SigmaStatus {
    /// Returns true if denominations may be created under this status.
    pub const fn is_enabled(self) -> bool {
        matches!(self, Self::SoftEnabled | Self::HardEnabled)
    }
}

/// Ecosystem a property lives in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Ecosystem {
    Main,
    Test,
}

impl Ecosystem {
    /// Wire representation of the ecosystem marker.
    pub const fn to_u8(self) -> u8 {
        match self {
            Self::Main => 1,
            Self::Test => 2,
        }
    }
}

/// A property (token) registered on the overlay ledger.
///
/// Immutable after creation; the denomination set it owns lives in the
/// denomination registry, keyed by `id`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Property {
    /// Unique identifier, assigned at creation.
    pub id: PropertyId,
    /// Human-readable name.
    pub name: String,
    /// Sigma feature status, fixed at creation.
    pub sigma_status: SigmaStatus,
}

impl Property {
    /// Creates a property record.
    pub fn new(id: PropertyId, name: impl Into<String>, sigma_status: SigmaStatus) -> Self {
        Self {
            id,
            name: name.into(),
            sigma_status,
        }
    }

    /// Returns true if the property has opted into the Sigma scheme.
    pub fn is_sigma_enabled(&self) -> bool {
        self.sigma_status.is_enabled()
    }
}
