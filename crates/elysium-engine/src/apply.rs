//! Confirmed-payload application.

use crate::error::ApplyError;
use elysium_codec::decode_create_denomination;
use elysium_registry::DenominationStore;
use elysium_types::DenominationIndex;
use tracing::{instrument, warn};

/// Applies a create-denomination payload from a confirmed transaction.
///
/// Decodes the payload and registers the denomination, returning the index
/// the new value was assigned. This is the only driver of denomination
/// registry mutation; it enforces the same existence/Sigma/uniqueness
/// rules as payload validation plus the per-property capacity bound, so a
/// stale or crafted payload cannot corrupt the registries.
#[instrument(skip(ledger, payload))]
pub fn apply_create_denomination<L>(
    ledger: &L,
    payload: &[u8],
) -> Result<DenominationIndex, ApplyError>
where
    L: DenominationStore,
{
    let (property, value) = decode_create_denomination(payload).map_err(|err| {
        warn!(%err, len = payload.len(), "rejecting malformed create-denomination payload");
        err
    })?;

    Ok(ledger.register(property, value)?)
}
