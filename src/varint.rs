//! Variable-length signed integer coding used by the polyline format.
//!
//! Each value is zigzag-mapped to an unsigned integer and emitted as 5-bit
//! chunks, least significant first. Every chunk except the last carries the
//! continuation flag, and each byte is offset by 63 so the output stays in
//! printable ASCII (`?` through `~`).

use crate::error::DecodeError;

/// Offset added to every chunk to land in printable ASCII.
pub const ASCII_OFFSET: u8 = 63;

/// Largest byte the encoder can produce (`~`).
pub const MAX_ENCODED_BYTE: u8 = ASCII_OFFSET + 0x3f;

/// Fixed-point scaling factor: coordinates are stored with 5 decimal places.
pub const PRECISION: f64 = 1e5;

const CHUNK_BITS: u32 = 5;
const CHUNK_MASK: u32 = 0x1f;
const CONTINUATION: u32 = 0x20;

/// A 32-bit zigzag value needs at most seven 5-bit chunks.
const MAX_CHUNKS: u32 = 7;

/// Quantize a coordinate to its fixed-point representation.
///
/// Rounds half away from zero. Values beyond the 32-bit range are truncated
/// to the low 32 bits; NaN maps to 0.
#[inline]
pub(crate) fn to_fixed(value: f64) -> i32 {
    (value * PRECISION).round() as i64 as i32
}

/// Inverse of [`to_fixed`]: plain division, no rounding.
#[inline]
pub(crate) fn from_fixed(value: i32) -> f64 {
    f64::from(value) / PRECISION
}

#[inline]
fn zigzag(value: i32) -> u32 {
    ((value << 1) ^ (value >> 31)) as u32
}

#[inline]
fn unzigzag(value: u32) -> i32 {
    ((value >> 1) as i32) ^ -((value & 1) as i32)
}

/// Append the encoding of `value` to `out`. Always writes at least one byte.
pub(crate) fn encode_value(value: i32, out: &mut String) {
    let mut remaining = zigzag(value);

    while remaining >= CONTINUATION {
        let chunk = (CONTINUATION | (remaining & CHUNK_MASK)) as u8;
        out.push(char::from(chunk + ASCII_OFFSET));
        remaining >>= CHUNK_BITS;
    }
    out.push(char::from(remaining as u8 + ASCII_OFFSET));
}

/// Decode one value starting at `cursor`.
///
/// Returns the value together with the position just past its last byte.
pub(crate) fn decode_value(bytes: &[u8], cursor: usize) -> Result<(i32, usize), DecodeError> {
    let start = cursor;
    let mut position = cursor;
    let mut result: u64 = 0;
    let mut chunks = 0;

    loop {
        let Some(&byte) = bytes.get(position) else {
            return Err(DecodeError::Truncated { position });
        };
        if !(ASCII_OFFSET..=MAX_ENCODED_BYTE).contains(&byte) {
            return Err(DecodeError::InvalidByte { position, byte });
        }
        if chunks == MAX_CHUNKS {
            return Err(DecodeError::Overflow { position: start });
        }

        let chunk = u32::from(byte - ASCII_OFFSET);
        result |= u64::from(chunk & CHUNK_MASK) << (chunks * CHUNK_BITS);
        chunks += 1;
        position += 1;

        if chunk < CONTINUATION {
            break;
        }
    }

    let result = u32::try_from(result).map_err(|_| DecodeError::Overflow { position: start })?;
    Ok((unzigzag(result), position))
}
