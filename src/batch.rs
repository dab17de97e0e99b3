//! Batch encoding and decoding of many independent paths.
//!
//! Every item is a pure call with its own accumulators, so large batches
//! are spread across the rayon thread pool. Output order matches input
//! order.

use rayon::prelude::*;

use crate::error::BatchDecodeError;
use crate::polyline::{decode, encode};

#[derive(Debug, Clone)]
pub struct BatchOptions {
    /// Batches with fewer items than this run on the calling thread.
    pub parallel_threshold: usize,
}

impl Default for BatchOptions {
    fn default() -> Self {
        Self {
            parallel_threshold: 64,
        }
    }
}

impl BatchOptions {
    fn is_parallel(&self, len: usize) -> bool {
        len >= self.parallel_threshold
    }
}

/// Encode each path, preserving order.
pub fn encode_all<P>(paths: &[P], options: &BatchOptions) -> Vec<String>
where
    P: AsRef<[(f64, f64)]> + Sync,
{
    let parallel = options.is_parallel(paths.len());
    tracing::trace!(count = paths.len(), parallel, "encoding polyline batch");

    if parallel {
        paths.par_iter().map(|path| encode(path.as_ref())).collect()
    } else {
        paths.iter().map(|path| encode(path.as_ref())).collect()
    }
}

/// Decode each polyline, preserving order.
///
/// Fails as a whole if any item fails, reporting the lowest failing index.
pub fn decode_all<S>(
    polylines: &[S],
    options: &BatchOptions,
) -> Result<Vec<Vec<(f64, f64)>>, BatchDecodeError>
where
    S: AsRef<str> + Sync,
{
    let parallel = options.is_parallel(polylines.len());
    tracing::trace!(count = polylines.len(), parallel, "decoding polyline batch");

    let decode_at = |(index, polyline): (usize, &S)| {
        decode(polyline.as_ref()).map_err(|source| BatchDecodeError { index, source })
    };

    if parallel {
        // rayon picks an arbitrary error when several items fail, so gather
        // everything and let the sequential collect find the lowest index.
        let results: Vec<_> = polylines.par_iter().enumerate().map(decode_at).collect();
        results.into_iter().collect()
    } else {
        polylines.iter().enumerate().map(decode_at).collect()
    }
}
