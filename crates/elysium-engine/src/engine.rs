//! Create-denomination validation.

use crate::error::ValidationError;
use elysium_codec::encode_create_denomination;
use elysium_registry::{DenominationView, PropertyView};
use elysium_types::{DenominationValue, PropertyId};
use tracing::{debug, instrument};

/// Validates a create-denomination request and encodes its payload.
///
/// Checks run in a fixed order, and the first failing check is the one a
/// caller observes for compound-invalid input:
///
/// 1. the property must exist,
/// 2. it must have Sigma enabled,
/// 3. `value` must not be registered for it yet.
///
/// On success returns the 16-byte transaction payload. Registry state is
/// never touched — registration happens only when the transaction carrying
/// this payload is confirmed and applied.
#[instrument(skip(ledger))]
pub fn create_denomination<L>(
    ledger: &L,
    property: PropertyId,
    value: DenominationValue,
) -> Result<Vec<u8>, ValidationError>
where
    L: PropertyView + DenominationView,
{
    let record = ledger
        .get(property)
        .ok_or(ValidationError::PropertyNotFound(property))?;

    if !record.is_sigma_enabled() {
        return Err(ValidationError::SigmaNotEnabled(property));
    }

    if ledger.contains(property, value) {
        return Err(ValidationError::DenominationAlreadyExists(value));
    }

    debug!(%property, %value, "create-denomination payload accepted");
    Ok(encode_create_denomination(property, value))
}
