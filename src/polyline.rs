//! Polyline encoding and decoding for route geometries.
//!
//! Paths are sequences of `(latitude, longitude)` pairs. Each coordinate is
//! quantized to 5 decimal places and stored as the delta from the previous
//! point on the same axis, starting from an implicit `(0, 0)` origin.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DecodeError;
use crate::varint::{decode_value, encode_value, from_fixed, to_fixed};

/// Typical encoded bytes per point for road-scale deltas.
const ESTIMATED_BYTES_PER_POINT: usize = 8;

/// Encode a path into a polyline string.
///
/// An empty path encodes to an empty string. Coordinates are not range
/// checked.
pub fn encode(path: &[(f64, f64)]) -> String {
    let mut out = String::with_capacity(path.len() * ESTIMATED_BYTES_PER_POINT);
    let mut prev_lat = 0i32;
    let mut prev_lng = 0i32;

    for &(lat, lng) in path {
        let lat = to_fixed(lat);
        let lng = to_fixed(lng);

        encode_value(lat.wrapping_sub(prev_lat), &mut out);
        encode_value(lng.wrapping_sub(prev_lng), &mut out);

        prev_lat = lat;
        prev_lng = lng;
    }

    out
}

/// Decode a polyline string back into a path.
///
/// Fails if the string is truncated, contains bytes outside the encoded
/// alphabet, or encodes a value wider than 32 bits. There are no partial
/// results.
pub fn decode(polyline: &str) -> Result<Vec<(f64, f64)>, DecodeError> {
    let bytes = polyline.as_bytes();
    // Every point takes at least two bytes.
    let mut points = Vec::with_capacity(bytes.len() / 2);
    let mut cursor = 0;
    let mut lat = 0i32;
    let mut lng = 0i32;

    while cursor < bytes.len() {
        let (d_lat, next) = decode_value(bytes, cursor).inspect_err(log_failure)?;
        let (d_lng, next) = decode_value(bytes, next).inspect_err(log_failure)?;
        cursor = next;

        lat = lat.wrapping_add(d_lat);
        lng = lng.wrapping_add(d_lng);
        points.push((from_fixed(lat), from_fixed(lng)));
    }

    Ok(points)
}

fn log_failure(err: &DecodeError) {
    tracing::debug!(position = err.position(), error = %err, "polyline decode failed");
}

/// A polyline representing a route geometry as decoded coordinates.
///
/// Stores latitude/longitude points directly. Use [`Polyline::encode`] or
/// `to_string()` to produce the compact form, and [`Polyline::decode`] or
/// `str::parse` to read it back.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<(f64, f64)>,
}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    ///
    /// Each point is a (latitude, longitude) tuple.
    pub fn new(points: Vec<(f64, f64)>) -> Self {
        Self { points }
    }

    /// Parses an encoded polyline string.
    pub fn decode(encoded: &str) -> Result<Self, DecodeError> {
        decode(encoded).map(Self::new)
    }

    /// Encodes the points into the compact polyline format.
    pub fn encode(&self) -> String {
        encode(&self.points)
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[(f64, f64)] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<(f64, f64)> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

impl From<Vec<(f64, f64)>> for Polyline {
    fn from(points: Vec<(f64, f64)>) -> Self {
        Self::new(points)
    }
}

impl fmt::Display for Polyline {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl FromStr for Polyline {
    type Err = DecodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::decode(s)
    }
}
