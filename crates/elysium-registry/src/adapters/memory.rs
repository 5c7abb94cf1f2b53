//! In-memory ledger state owning both registries.

use crate::domain::{
    DenominationIndex, DenominationRegistry, DenominationValue, Property, PropertyId,
    PropertyRegistry, RegistryConfig, RegistryError, SigmaStatus,
};
use crate::ports::{DenominationStore, DenominationView, PropertyView};
use parking_lot::{RwLock, RwLockReadGuard};
use tracing::debug;

#[derive(Debug)]
struct Registries {
    properties: PropertyRegistry,
    denominations: DenominationRegistry,
}

/// Ledger-derived registry state behind a reader-writer lock.
///
/// Validation requests take the read side; property creation and
/// denomination registration (confirmed transactions only) take the write
/// side. A request needing several lookups against one consistent snapshot
/// should go through [`LedgerState::view`].
#[derive(Debug)]
pub struct LedgerState {
    registries: RwLock<Registries>,
}

impl LedgerState {
    /// Creates empty ledger state with the given registry configuration.
    pub fn new(config: RegistryConfig) -> Self {
        Self {
            registries: RwLock::new(Registries {
                properties: PropertyRegistry::new(),
                denominations: DenominationRegistry::new(config),
            }),
        }
    }

    /// Creates ledger state with default configuration.
    pub fn with_defaults() -> Self {
        Self::new(RegistryConfig::default())
    }

    /// Creates ledger state with a small capacity for testing.
    pub fn for_testing() -> Self {
        Self::new(RegistryConfig::for_testing())
    }

    /// Registers a new property and returns its assigned identifier.
    pub fn create_property(
        &self,
        name: impl Into<String>,
        sigma_status: SigmaStatus,
    ) -> PropertyId {
        let mut registries = self.registries.write();
        let id = registries.properties.create(name, sigma_status);
        debug!(%id, ?sigma_status, "property registered");
        id
    }

    /// Takes a consistent read snapshot of both registries.
    ///
    /// The returned view holds the read lock until dropped, so a chain of
    /// lookups sees no interleaved mutation.
    pub fn view(&self) -> LedgerView<'_> {
        LedgerView {
            guard: self.registries.read(),
        }
    }
}

impl Default for LedgerState {
    fn default() -> Self {
        Self::with_defaults()
    }
}

impl PropertyView for LedgerState {
    fn exists(&self, id: PropertyId) -> bool {
        self.registries.read().properties.exists(id)
    }

    fn get(&self, id: PropertyId) -> Option<Property> {
        self.registries.read().properties.get(id).cloned()
    }
}

impl DenominationView for LedgerState {
    fn contains(&self, property: PropertyId, value: DenominationValue) -> bool {
        self.registries.read().denominations.contains(property, value)
    }

    fn list(&self, property: PropertyId) -> Vec<DenominationValue> {
        self.registries.read().denominations.list(property).to_vec()
    }
}

impl DenominationStore for LedgerState {
    fn register(
        &self,
        property: PropertyId,
        value: DenominationValue,
    ) -> Result<DenominationIndex, RegistryError> {
        let mut guard = self.registries.write();
        let registries = &mut *guard;

        let record = registries
            .properties
            .get(property)
            .ok_or(RegistryError::PropertyNotFound(property))?;
        if !record.is_sigma_enabled() {
            return Err(RegistryError::SigmaNotEnabled(property));
        }

        let index = registries.denominations.insert(property, value)?;
        debug!(%property, %value, index, "denomination registered");
        Ok(index)
    }
}

/// Read snapshot of the ledger state.
///
/// Implements the same read ports as [`LedgerState`] while pinning one
/// consistent version of both registries.
pub struct LedgerView<'a> {
    guard: RwLockReadGuard<'a, Registries>,
}

impl PropertyView for LedgerView<'_> {
    fn exists(&self, id: PropertyId) -> bool {
        self.guard.properties.exists(id)
    }

    fn get(&self, id: PropertyId) -> Option<Property> {
        self.guard.properties.get(id).cloned()
    }
}

impl DenominationView for LedgerView<'_> {
    fn contains(&self, property: PropertyId, value: DenominationValue) -> bool {
        self.guard.denominations.contains(property, value)
    }

    fn list(&self, property: PropertyId) -> Vec<DenominationValue> {
        self.guard.denominations.list(property).to_vec()
    }
}
