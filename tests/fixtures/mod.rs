//! Test fixtures for polyline-codec.
//!
//! Provides realistic paths:
//! - A driving route along the Las Vegas Strip (from OpenStreetMap)
//! - Points at the edges of the coordinate space

pub mod routes;

pub use routes::*;
