//! Payload parsers.

use super::error::CodecError;
use super::types::{MessageType, CREATE_DENOMINATION_LEN, MESSAGE_CLASS};
use elysium_types::{DenominationValue, PropertyId};

/// Decodes a create-denomination payload back into its fields.
///
/// Accepts exactly the 16-byte layout produced by
/// [`encode_create_denomination`](crate::encode::encode_create_denomination);
/// any other length, class, or type is malformed.
pub fn decode_create_denomination(
    payload: &[u8],
) -> Result<(PropertyId, DenominationValue), CodecError> {
    if payload.len() != CREATE_DENOMINATION_LEN {
        return Err(CodecError::UnexpectedLength {
            expected: CREATE_DENOMINATION_LEN,
            actual: payload.len(),
        });
    }

    let class = u16::from_be_bytes([payload[0], payload[1]]);
    if class != MESSAGE_CLASS {
        return Err(CodecError::UnexpectedMessageClass {
            expected: MESSAGE_CLASS,
            actual: class,
        });
    }

    let msg_type = u16::from_be_bytes([payload[2], payload[3]]);
    if msg_type != MessageType::CreateDenomination.to_u16() {
        return Err(CodecError::UnexpectedMessageType {
            expected: MessageType::CreateDenomination.to_u16(),
            actual: msg_type,
        });
    }

    let property = u32::from_be_bytes([payload[4], payload[5], payload[6], payload[7]]);
    let value = u64::from_be_bytes([
        payload[8], payload[9], payload[10], payload[11], payload[12], payload[13], payload[14],
        payload[15],
    ]);

    Ok((PropertyId::new(property), DenominationValue::new(value)))
}
