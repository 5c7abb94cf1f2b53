//! Denomination registry: per-property value sets with uniqueness and
//! capacity enforcement.

use super::entities::{DenominationIndex, DenominationValue, PropertyId, RegistryConfig};
use super::errors::RegistryError;
use std::collections::HashMap;

/// Per-property ordered set of registered denomination values.
///
/// Values are kept in insertion order; the position of a value is its
/// wire-level denomination index. Uniqueness is the only validity rule on
/// the values themselves.
#[derive(Clone, Debug)]
pub struct DenominationRegistry {
    config: RegistryConfig,
    by_property: HashMap<PropertyId, Vec<DenominationValue>>,
}

impl DenominationRegistry {
    /// Creates an empty registry with the given configuration.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            config,
            by_property: HashMap::new(),
        }
    }

    /// Creates a registry with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RegistryConfig::default())
    }

    /// Returns the current configuration.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// Checks whether `value` is already registered for `property`.
    pub fn contains(&self, property: PropertyId, value: DenominationValue) -> bool {
        self.by_property
            .get(&property)
            .is_some_and(|values| values.contains(&value))
    }

    /// Registers a denomination value and returns its assigned index.
    ///
    /// Never overwrites: a duplicate value for the same property is always
    /// rejected, and a failed insert leaves the set unchanged.
    ///
    /// # Errors
    /// - `InvalidValue` for the zero amount
    /// - `DenominationAlreadyExists` if the value is registered already
    /// - `DenominationLimitReached` if the property's set is full
    pub fn insert(
        &mut self,
        property: PropertyId,
        value: DenominationValue,
    ) -> Result<DenominationIndex, RegistryError> {
        if value.is_zero() {
            return Err(RegistryError::InvalidValue);
        }

        let values = self.by_property.entry(property).or_default();
        if values.contains(&value) {
            return Err(RegistryError::DenominationAlreadyExists { property, value });
        }
        if values.len() >= self.config.max_denominations_per_property {
            return Err(RegistryError::DenominationLimitReached {
                property,
                limit: self.config.max_denominations_per_property,
            });
        }

        values.push(value);
        Ok((values.len() - 1) as DenominationIndex)
    }

    /// Lists the registered values for a property in insertion order.
    pub fn list(&self, property: PropertyId) -> &[DenominationValue] {
        self.by_property
            .get(&property)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Number of denominations registered for a property.
    pub fn count(&self, property: PropertyId) -> usize {
        self.by_property.get(&property).map_or(0, Vec::len)
    }
}
