//! Merkle tree computation tasks

use crate::{ComputeEngine, ComputeError};

/// Compute a merkle root over an ordered sequence of opaque items.
///
/// Leaves are `hash(item)`. Each level is padded to a power of two by
/// repeating its last node, and parents are `hash(left ++ right)` over the
/// hex strings.
pub struct MerkleRootTask {
    pub items: Vec<String>,
}

impl MerkleRootTask {
    pub fn new(items: Vec<String>) -> Self {
        Self { items }
    }

    /// Execute merkle root computation
    pub fn execute<E: ComputeEngine + ?Sized>(self, engine: &E) -> Result<String, ComputeError> {
        if self.items.is_empty() {
            return Err(ComputeError::InvalidInput(
                "Merkle root of an empty sequence".to_string(),
            ));
        }

        let leaf_inputs: Vec<Vec<u8>> = self
            .items
            .iter()
            .map(|item| item.as_bytes().to_vec())
            .collect();
        let mut current_level = engine.batch_hash(&leaf_inputs);

        if current_level.len() == 1 {
            return Ok(current_level.remove(0));
        }

        pad_to_power_of_two(&mut current_level);

        // Build tree level by level
        while current_level.len() > 1 {
            let pairs = pair_inputs(&current_level);
            current_level = engine.batch_hash(&pairs);
        }

        current_level
            .pop()
            .ok_or_else(|| ComputeError::TaskFailed("Merkle level collapsed to nothing".to_string()))
    }
}

/// Pad a level to the next power of two by repeating the last node.
pub fn pad_to_power_of_two(level: &mut Vec<String>) {
    let next_pow2 = level.len().next_power_of_two();
    if let Some(last) = level.last().cloned() {
        level.resize(next_pow2, last);
    }
}

/// Concatenate adjacent nodes into parent hash inputs.
pub fn pair_inputs(level: &[String]) -> Vec<Vec<u8>> {
    level
        .chunks(2)
        .map(|pair| {
            let mut combined = Vec::with_capacity(pair[0].len() * 2);
            combined.extend_from_slice(pair[0].as_bytes());
            if let Some(right) = pair.get(1) {
                combined.extend_from_slice(right.as_bytes());
            }
            combined
        })
        .collect()
}
