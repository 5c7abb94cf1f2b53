//! Denomination payload commands.

use crate::error::ApiResult;
use crate::params::{parse_denomination_value, parse_property_id};
use elysium_engine::{create_denomination, ValidationError};
use elysium_registry::{DenominationView, LedgerState, PropertyView};
use serde_json::Value;
use std::sync::Arc;
use tracing::instrument;

/// Denomination command handler.
///
/// Holds a handle to the ledger state; each command takes one consistent
/// read snapshot for the duration of its checks.
pub struct DenominationRpc {
    ledger: Arc<LedgerState>,
}

impl DenominationRpc {
    pub fn new(ledger: Arc<LedgerState>) -> Self {
        Self { ledger }
    }

    /// createpayload_createdenomination - Builds the raw payload that
    /// registers `value` as a Sigma denomination of `property_id`.
    ///
    /// Returns the lowercase-hex encoding of the 16-byte payload. The
    /// registries are not modified; registration happens when the
    /// transaction embedding this payload confirms.
    #[instrument(skip(self))]
    pub fn createpayload_createdenomination(
        &self,
        property_id: &Value,
        value: &Value,
    ) -> ApiResult<String> {
        let property = parse_property_id(property_id)?;
        let value = parse_denomination_value(value)?;

        let view = self.ledger.view();
        let payload = create_denomination(&view, property, value)?;
        Ok(hex::encode(payload))
    }

    /// listdenominations - Lists the denomination values registered for a
    /// property, in registration order, as decimal strings.
    #[instrument(skip(self))]
    pub fn listdenominations(&self, property_id: &Value) -> ApiResult<Vec<String>> {
        let property = parse_property_id(property_id)?;

        let view = self.ledger.view();
        if !view.exists(property) {
            return Err(ValidationError::PropertyNotFound(property).into());
        }
        Ok(view
            .list(property)
            .into_iter()
            .map(|value| value.to_string())
            .collect())
    }
}
