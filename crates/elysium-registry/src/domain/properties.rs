//! Property registry: id-keyed property metadata with monotonic assignment.

use super::entities::{Property, PropertyId, SigmaStatus};
use std::collections::HashMap;

/// Durable mapping from property identifier to property metadata.
///
/// Identifiers are assigned monotonically starting at 1 and are never
/// reused. Records are immutable once created; this registry exposes a
/// pure read path to the validation engine.
#[derive(Clone, Debug, Default)]
pub struct PropertyRegistry {
    by_id: HashMap<PropertyId, Property>,
    next_id: u32,
}

impl PropertyRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            by_id: HashMap::new(),
            next_id: 0,
        }
    }

    /// Registers a new property and returns its assigned identifier.
    ///
    /// Drives the fixture path and the confirmed-transaction application
    /// path; validation never calls this.
    pub fn create(&mut self, name: impl Into<String>, sigma_status: SigmaStatus) -> PropertyId {
        self.next_id += 1;
        let id = PropertyId::new(self.next_id);
        self.by_id.insert(id, Property::new(id, name, sigma_status));
        id
    }

    /// Checks whether a property identifier has an entry.
    pub fn exists(&self, id: PropertyId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Looks up a property record.
    pub fn get(&self, id: PropertyId) -> Option<&Property> {
        self.by_id.get(&id)
    }

    /// Returns the Sigma flag for a property, or `None` if it is absent.
    ///
    /// Callers deciding between "not found" and "not enabled" must treat
    /// `None` as the former.
    pub fn is_sigma_enabled(&self, id: PropertyId) -> Option<bool> {
        self.by_id.get(&id).map(Property::is_sigma_enabled)
    }

    /// Number of registered properties.
    pub fn len(&self) -> usize {
        self.by_id.len()
    }

    /// Returns true if no property has been registered.
    pub fn is_empty(&self) -> bool {
        self.by_id.is_empty()
    }
}
