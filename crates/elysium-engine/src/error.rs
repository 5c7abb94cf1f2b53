//! Validation and application error types.

use elysium_codec::CodecError;
use elysium_registry::RegistryError;
use elysium_types::{DenominationValue, PropertyId};
use thiserror::Error;

/// Rejections raised while validating a create-denomination request.
///
/// The display strings are the externally visible contract; the command
/// surface forwards them verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The referenced property has no entry in the property registry.
    #[error("Property identifier does not exist")]
    PropertyNotFound(PropertyId),

    /// The property exists but has not opted into the Sigma scheme.
    #[error("Property has not enabled Sigma")]
    SigmaNotEnabled(PropertyId),

    /// The value is already registered for this property.
    #[error("Denomination with value {0} already exists")]
    DenominationAlreadyExists(DenominationValue),
}

/// Failures while applying a confirmed create-denomination payload.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// The payload bytes do not form a create-denomination message.
    #[error(transparent)]
    Malformed(#[from] CodecError),

    /// The ledger rejected the registration.
    #[error(transparent)]
    Rejected(#[from] RegistryError),
}
