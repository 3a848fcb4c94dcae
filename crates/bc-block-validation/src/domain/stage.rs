//! The six consensus stages, in evaluation order

use serde::{Deserialize, Serialize};
use std::fmt;

/// A single consensus rule a block must satisfy.
///
/// Declaration order is evaluation order. Cheap structural rules come first
/// and `Distance`, the most expensive recomputation, is always last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Block declares the genesis set of child blockchains.
    GenesisFingerprint,
    /// Exactly the required number of chains carry headers.
    ChildChainCount,
    /// Headers within each chain strictly ascend by height.
    HeaderOrdering,
    /// Declared chain root matches the recomputed aggregate.
    ChainRoot,
    /// Declared merkle root matches the recomputed tree.
    MerkleRoot,
    /// Declared distance matches the recomputed score.
    Distance,
}

impl Stage {
    /// All stages in evaluation order.
    pub const ALL: [Stage; 6] = [
        Stage::GenesisFingerprint,
        Stage::ChildChainCount,
        Stage::HeaderOrdering,
        Stage::ChainRoot,
        Stage::MerkleRoot,
        Stage::Distance,
    ];

    /// Stable identifier used in logs and metric labels.
    pub fn name(self) -> &'static str {
        match self {
            Stage::GenesisFingerprint => "genesis_fingerprint",
            Stage::ChildChainCount => "child_chain_count",
            Stage::HeaderOrdering => "header_ordering",
            Stage::ChainRoot => "chain_root",
            Stage::MerkleRoot => "merkle_root",
            Stage::Distance => "distance",
        }
    }

    /// Whether the stage recomputes a digest through the compute engine.
    pub fn needs_compute(self) -> bool {
        matches!(self, Stage::ChainRoot | Stage::MerkleRoot | Stage::Distance)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
