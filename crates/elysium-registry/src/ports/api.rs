//! # Registry Ports
//!
//! Read-only views consumed by the validation engine, plus the mutating
//! store driven by the confirmed-transaction application path. The engine
//! receives these by handle; registry state is never ambient.

use crate::domain::{DenominationIndex, DenominationValue, Property, PropertyId, RegistryError};

/// Read access to the property registry.
pub trait PropertyView {
    /// Checks whether a property identifier has an entry.
    fn exists(&self, id: PropertyId) -> bool;

    /// Looks up a property record.
    fn get(&self, id: PropertyId) -> Option<Property>;
}

/// Read access to the denomination registry.
pub trait DenominationView {
    /// Checks whether `value` is already registered for `property`.
    fn contains(&self, property: PropertyId, value: DenominationValue) -> bool;

    /// Lists the registered values for a property in insertion order.
    fn list(&self, property: PropertyId) -> Vec<DenominationValue>;
}

/// Mutating access to the denomination registry.
///
/// Only the application path for confirmed transactions goes through this
/// port; payload validation never mutates.
pub trait DenominationStore: DenominationView + Send + Sync {
    /// Registers a denomination value and returns its assigned index.
    ///
    /// # Errors
    /// - `PropertyNotFound` if the property has no entry
    /// - `SigmaNotEnabled` if the property has not opted into Sigma
    /// - `InvalidValue` for the zero amount
    /// - `DenominationAlreadyExists` if the value is registered already
    /// - `DenominationLimitReached` if the property's set is full
    fn register(
        &self,
        property: PropertyId,
        value: DenominationValue,
    ) -> Result<DenominationIndex, RegistryError>;
}
