//! Work preparation and distance scoring
//!
//! A block's proof of work is expressed as a distance between two digests
//! rather than a hash-below-target test:
//!
//! ```text
//! work   = hash(previous_hash ++ Σ(child.hash ++ child.merkle_root))
//! digest = hash(miner ++ merkle_root ++ hash(nonce) ++ timestamp)
//! score  = floor(Σ_chunks (1 - cos(work_chunk, digest_chunk)) * 10^15)
//! ```

use crate::tasks::hashing::{is_digest, DIGEST_HEX_LEN};
use crate::{ComputeEngine, ComputeError, WorkValue};
use shared_types::{HeadersByChain, U256};

/// Number of hex characters compared per cosine term.
pub const DISTANCE_CHUNK_LEN: usize = 32;

/// Fixed-point scale applied to the summed cosine distance.
pub const DISTANCE_SCALE: f64 = 1_000_000_000_000_000.0;

/// Work value binding the previous block to the current child evidence.
pub fn prepare_work<E: ComputeEngine + ?Sized>(
    engine: &E,
    previous_hash: &str,
    headers: &HeadersByChain,
) -> Result<WorkValue, ComputeError> {
    if previous_hash.is_empty() {
        return Err(ComputeError::InvalidInput(
            "Previous hash is empty".to_string(),
        ));
    }

    let mut input = String::from(previous_hash);
    for header in headers.values().flatten() {
        input.push_str(&header.hash);
        input.push_str(&header.merkle_root);
    }

    Ok(WorkValue::new(engine.hash(input.as_bytes())))
}

/// Digest a miner commits to: `hash(miner ++ merkle_root ++ hash(nonce) ++ timestamp)`.
pub fn mining_digest<E: ComputeEngine + ?Sized>(
    engine: &E,
    miner: &str,
    merkle_root: &str,
    nonce: &str,
    timestamp: u64,
) -> String {
    let nonce_hash = engine.hash(nonce.as_bytes());
    let input = format!("{miner}{merkle_root}{nonce_hash}{timestamp}");
    engine.hash(input.as_bytes())
}

/// Scaled cosine distance between a work value and a mining digest.
pub fn distance(work: &WorkValue, digest: &str) -> Result<U256, ComputeError> {
    ensure_digest("work", work.as_str())?;
    ensure_digest("digest", digest)?;

    let total: f64 = work
        .as_str()
        .as_bytes()
        .chunks(DISTANCE_CHUNK_LEN)
        .zip(digest.as_bytes().chunks(DISTANCE_CHUNK_LEN))
        .map(|(a, b)| (1.0 - cosine_similarity(a, b)).max(0.0))
        .sum();

    let scaled = (total * DISTANCE_SCALE).floor();
    Ok(U256::from(scaled as u64))
}

fn ensure_digest(name: &str, value: &str) -> Result<(), ComputeError> {
    if is_digest(value) {
        Ok(())
    } else {
        Err(ComputeError::InvalidInput(format!(
            "{name} must be {DIGEST_HEX_LEN} hex characters, got {:?}",
            value
        )))
    }
}

/// Cosine similarity of two character-code vectors of equal length.
///
/// Dot products and norms are accumulated in integers and the norm product
/// is taken under a single square root, so identical chunks score exactly 1.
fn cosine_similarity(a: &[u8], b: &[u8]) -> f64 {
    let (dot, norm_a, norm_b) = a.iter().zip(b).fold((0u64, 0u64, 0u64), |acc, (&x, &y)| {
        let (x, y) = (u64::from(x), u64::from(y));
        (acc.0 + x * y, acc.1 + x * x, acc.2 + y * y)
    });
    if norm_a == 0 || norm_b == 0 {
        return 0.0;
    }
    dot as f64 / ((norm_a * norm_b) as f64).sqrt()
}
