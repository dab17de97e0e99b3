//! Error types for polyline decoding.
//!
//! Encoding is infallible. Decoding either consumes the whole input or
//! fails with the byte offset of the problem.

use thiserror::Error;

/// Failure while decoding an encoded polyline string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The input ended in the middle of a value, or after a latitude with
    /// no longitude following it.
    #[error("polyline truncated at byte {position}")]
    Truncated { position: usize },

    /// A byte outside the encoded alphabet (ASCII 63..=126).
    #[error("invalid byte 0x{byte:02x} at position {position}")]
    InvalidByte { position: usize, byte: u8 },

    /// A value that does not fit in a 32-bit delta.
    #[error("value starting at byte {position} overflows 32 bits")]
    Overflow { position: usize },
}

impl DecodeError {
    /// Byte offset in the input where decoding stopped.
    pub fn position(&self) -> usize {
        match *self {
            DecodeError::Truncated { position }
            | DecodeError::InvalidByte { position, .. }
            | DecodeError::Overflow { position } => position,
        }
    }
}

/// Failure of one item in a batch decode.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("polyline #{index} failed to decode: {source}")]
pub struct BatchDecodeError {
    /// Index of the first failing polyline in the batch.
    pub index: usize,
    #[source]
    pub source: DecodeError,
}
