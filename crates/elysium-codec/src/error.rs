//! Codec error types.

use thiserror::Error;

/// Malformed-payload rejections raised while decoding.
///
/// Decoding fails closed: any deviation from the fixed layout is terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodecError {
    /// Payload length does not match the fixed layout.
    #[error("malformed payload: expected {expected} bytes, got {actual}")]
    UnexpectedLength { expected: usize, actual: usize },

    /// Leading message class field does not match.
    #[error("malformed payload: expected message class {expected:#06x}, got {actual:#06x}")]
    UnexpectedMessageClass { expected: u16, actual: u16 },

    /// Message type field does not match the expected operation.
    #[error("malformed payload: expected message type {expected:#06x}, got {actual:#06x}")]
    UnexpectedMessageType { expected: u16, actual: u16 },
}
