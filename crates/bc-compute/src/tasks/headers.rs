//! Child header flattening and the aggregate chain root

use crate::{ComputeEngine, ComputeError};
use shared_types::HeadersByChain;

/// Flatten headers into their hashes: chain-name order, then sequence order.
///
/// The order is part of consensus. It is not sorted or deduplicated.
pub fn flatten_headers(headers: &HeadersByChain) -> Vec<String> {
    headers
        .values()
        .flat_map(|chain| chain.iter().map(|header| header.hash.clone()))
        .collect()
}

/// Digest over the concatenation of `hashes` in the given order.
///
/// An empty sequence hashes the empty string.
pub fn aggregate_root_hash<E: ComputeEngine + ?Sized>(
    engine: &E,
    hashes: &[String],
) -> Result<String, ComputeError> {
    Ok(engine.hash(hashes.concat().as_bytes()))
}
