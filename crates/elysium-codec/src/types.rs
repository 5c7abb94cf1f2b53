//! Message taxonomy constants for the overlay wire format.

/// Message class for the standard operation set.
pub const MESSAGE_CLASS: u16 = 0x0000;

/// Encoded length of a create-denomination payload:
/// class (2) + type (2) + property id (4) + value (8).
pub const CREATE_DENOMINATION_LEN: usize = 16;

/// Longest memo carried by grant/revoke payloads, excluding the
/// NUL terminator. Longer input is truncated at this many bytes.
pub const MAX_MEMO_LEN: usize = 255;

/// Operation tag within the overlay protocol's message taxonomy.
#[repr(u16)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MessageType {
    SimpleSend = 0x0000,
    SendAll = 0x0004,
    Grant = 0x0037,
    Revoke = 0x0038,
    ChangeIssuer = 0x0046,
    EnableFreezing = 0x0047,
    DisableFreezing = 0x0048,
    CreateDenomination = 0x0401,
}

impl MessageType {
    /// Wire representation of the tag.
    pub const fn to_u16(self) -> u16 {
        self as u16
    }

    /// Resolves a wire tag back to a known message type.
    pub const fn from_u16(raw: u16) -> Option<Self> {
        match raw {
            0x0000 => Some(Self::SimpleSend),
            0x0004 => Some(Self::SendAll),
            0x0037 => Some(Self::Grant),
            0x0038 => Some(Self::Revoke),
            0x0046 => Some(Self::ChangeIssuer),
            0x0047 => Some(Self::EnableFreezing),
            0x0048 => Some(Self::DisableFreezing),
            0x0401 => Some(Self::CreateDenomination),
            _ => None,
        }
    }
}
