//! Registry error types.

use super::entities::{DenominationValue, PropertyId};
use thiserror::Error;

/// Rejections raised by registry mutations.
///
/// All variants are terminal validation failures; none are retryable, and
/// a failed mutation leaves the registries untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// The referenced property has no entry in the property registry.
    #[error("property {0} does not exist")]
    PropertyNotFound(PropertyId),

    /// The property exists but has not opted into the Sigma scheme.
    #[error("property {0} has not enabled Sigma")]
    SigmaNotEnabled(PropertyId),

    /// Zero is never a valid denomination amount.
    #[error("denomination value must be greater than zero")]
    InvalidValue,

    /// The value is already registered for this property.
    #[error("denomination with value {value} already exists for property {property}")]
    DenominationAlreadyExists {
        property: PropertyId,
        value: DenominationValue,
    },

    /// The property's denomination set is full.
    #[error("property {property} already holds the maximum of {limit} denominations")]
    DenominationLimitReached { property: PropertyId, limit: usize },
}
