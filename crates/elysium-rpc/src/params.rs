//! Parameter parsing at the command-surface edge.
//!
//! The base ledger's RPC conventions allow numeric parameters to arrive
//! either as JSON integers or as decimal strings. Both forms are parsed
//! here into fixed-width typed integers; everything downstream operates on
//! the typed form only.

use crate::error::{ApiError, ApiResult};
use elysium_types::{DenominationValue, PropertyId};
use serde_json::Value;

/// Parses a property identifier parameter.
///
/// Accepts a JSON integer or decimal string in `[1, u32::MAX]`.
pub fn parse_property_id(param: &Value) -> ApiResult<PropertyId> {
    let raw = parse_u64(param)
        .ok_or_else(|| ApiError::invalid_params("Property identifier must be a number or decimal string"))?;

    if raw < 1 || raw > u64::from(u32::MAX) {
        return Err(ApiError::invalid_params("Property identifier is out of range"));
    }

    Ok(PropertyId::new(raw as u32))
}

/// Parses a denomination amount parameter.
///
/// Accepts a JSON integer or decimal string; zero is never a valid amount.
pub fn parse_denomination_value(param: &Value) -> ApiResult<DenominationValue> {
    let raw = parse_u64(param).ok_or_else(|| ApiError::invalid_params("Invalid amount"))?;

    if raw == 0 {
        return Err(ApiError::invalid_params("Invalid amount"));
    }

    Ok(DenominationValue::new(raw))
}

fn parse_u64(param: &Value) -> Option<u64> {
    match param {
        Value::Number(number) => number.as_u64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}
