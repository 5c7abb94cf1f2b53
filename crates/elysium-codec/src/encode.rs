//! Payload constructors.
//!
//! Each function lays out one operation's fields behind the shared
//! class/type header and returns the exact transaction-ready bytes.

use super::types::{MessageType, MAX_MEMO_LEN, MESSAGE_CLASS};
use elysium_types::{DenominationValue, Ecosystem, PropertyId};

/// Starts a payload with the class/type header.
fn packet(msg_type: MessageType, body_len: usize) -> Vec<u8> {
    let mut out = Vec::with_capacity(4 + body_len);
    out.extend_from_slice(&MESSAGE_CLASS.to_be_bytes());
    out.extend_from_slice(&msg_type.to_u16().to_be_bytes());
    out
}

/// Appends a memo truncated to [`MAX_MEMO_LEN`] bytes plus a NUL terminator.
fn put_memo(out: &mut Vec<u8>, memo: &str) {
    let bytes = memo.as_bytes();
    let len = bytes.len().min(MAX_MEMO_LEN);
    out.extend_from_slice(&bytes[..len]);
    out.push(0);
}

/// Encodes a create-denomination payload: registers `value` as a Sigma
/// denomination of `property`.
pub fn encode_create_denomination(property: PropertyId, value: DenominationValue) -> Vec<u8> {
    let mut out = packet(MessageType::CreateDenomination, 12);
    out.extend_from_slice(&property.raw().to_be_bytes());
    out.extend_from_slice(&value.raw().to_be_bytes());
    out
}

/// Encodes a simple-send payload: transfers `amount` of `property`.
pub fn encode_simple_send(property: PropertyId, amount: u64) -> Vec<u8> {
    let mut out = packet(MessageType::SimpleSend, 12);
    out.extend_from_slice(&property.raw().to_be_bytes());
    out.extend_from_slice(&amount.to_be_bytes());
    out
}

/// Encodes a send-all payload: transfers every balance in `ecosystem`.
pub fn encode_send_all(ecosystem: Ecosystem) -> Vec<u8> {
    let mut out = packet(MessageType::SendAll, 1);
    out.push(ecosystem.to_u8());
    out
}

/// Encodes a grant payload: issues `amount` units of a managed `property`.
pub fn encode_grant(property: PropertyId, amount: u64, memo: &str) -> Vec<u8> {
    let mut out = packet(MessageType::Grant, 12 + memo.len().min(MAX_MEMO_LEN) + 1);
    out.extend_from_slice(&property.raw().to_be_bytes());
    out.extend_from_slice(&amount.to_be_bytes());
    put_memo(&mut out, memo);
    out
}

/// Encodes a revoke payload: destroys `amount` units of a managed `property`.
pub fn encode_revoke(property: PropertyId, amount: u64, memo: &str) -> Vec<u8> {
    let mut out = packet(MessageType::Revoke, 12 + memo.len().min(MAX_MEMO_LEN) + 1);
    out.extend_from_slice(&property.raw().to_be_bytes());
    out.extend_from_slice(&amount.to_be_bytes());
    put_memo(&mut out, memo);
    out
}

/// Encodes a change-issuer payload for `property`.
pub fn encode_change_issuer(property: PropertyId) -> Vec<u8> {
    let mut out = packet(MessageType::ChangeIssuer, 4);
    out.extend_from_slice(&property.raw().to_be_bytes());
    out
}

/// Encodes an enable-freezing payload for a managed `property`.
pub fn encode_enable_freezing(property: PropertyId) -> Vec<u8> {
    let mut out = packet(MessageType::EnableFreezing, 4);
    out.extend_from_slice(&property.raw().to_be_bytes());
    out
}

/// Encodes a disable-freezing payload for a managed `property`.
pub fn encode_disable_freezing(property: PropertyId) -> Vec<u8> {
    let mut out = packet(MessageType::DisableFreezing, 4);
    out.extend_from_slice(&property.raw().to_be_bytes());
    out
}
