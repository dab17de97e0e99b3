//! polyline-codec
//!
//! Encoder and decoder for the Google encoded polyline format at the
//! classic 1e5 (5 decimal place) precision.

pub mod batch;
pub mod error;
pub mod polyline;
mod varint;

pub use batch::{decode_all, encode_all, BatchOptions};
pub use error::{BatchDecodeError, DecodeError};
pub use polyline::{decode, encode, Polyline};
pub use varint::PRECISION;
