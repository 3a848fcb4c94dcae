//! # Core Domain Entities
//!
//! Defines the braided block and the child-chain headers it summarizes.
//!
//! ## Clusters
//!
//! - **Braided block**: `Block`, the candidate that references child chains
//! - **Child chains**: `ChildHeader`, `HeadersByChain`
//!
//! Hash-like fields of the braided block are lowercase hex strings, the same
//! representation the compute engine produces, so comparisons are plain string
//! equality. Child header hashes are opaque and kept as the child chain
//! encodes them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

// Re-export U256 from primitive-types for use across all crates
pub use primitive_types::U256;

// =============================================================================
// CLUSTER A: CHILD CHAINS
// =============================================================================

/// Name of a child blockchain (e.g. `btc`, `eth`).
pub type ChainName = String;

/// Child headers keyed by chain name.
///
/// `BTreeMap` iteration order (lexicographic by chain name) is the canonical
/// chain order used when flattening headers for root computation.
pub type HeadersByChain = BTreeMap<ChainName, Vec<ChildHeader>>;

/// A block header from one of the child blockchains.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChildHeader {
    /// Chain this header was taken from. Must match its map key.
    pub blockchain: ChainName,
    /// Hash of the child block, in the child chain's own encoding.
    pub hash: String,
    /// Hash of the child block's parent (hex).
    #[serde(default)]
    pub previous_hash: String,
    /// Height of the child block on its own chain.
    pub height: u64,
    /// Merkle root of the child block (hex).
    #[serde(default)]
    pub merkle_root: String,
    /// Child block timestamp (Unix milliseconds).
    #[serde(default)]
    pub timestamp: u64,
}

impl ChildHeader {
    /// Create a header with the fields that take part in validation.
    pub fn new(blockchain: impl Into<String>, hash: impl Into<String>, height: u64) -> Self {
        Self {
            blockchain: blockchain.into(),
            hash: hash.into(),
            previous_hash: String::new(),
            height,
            merkle_root: String::new(),
            timestamp: 0,
        }
    }

    /// Builder-style setter for the child merkle root.
    pub fn with_merkle_root(mut self, merkle_root: impl Into<String>) -> Self {
        self.merkle_root = merkle_root.into();
        self
    }
}

// =============================================================================
// CLUSTER B: THE BRAIDED BLOCK
// =============================================================================

/// A candidate block as received from the network or a local miner.
///
/// Validation never mutates a `Block`; every check takes `&Block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    /// Block hash (hex). Used to identify the block in logs and reports.
    #[serde(default)]
    pub hash: String,
    /// Hash of the previous braided block (hex).
    pub previous_hash: String,
    /// Protocol version.
    pub version: u64,
    /// Serialization schema version.
    pub schema_version: u64,
    /// Height of this block.
    pub height: u64,
    /// Miner address.
    pub miner: String,
    /// Declared difficulty. Carried for consumers, not checked here.
    #[serde(default)]
    pub difficulty: U256,
    /// Block timestamp (Unix milliseconds).
    pub timestamp: u64,
    /// Declared merkle root over child hashes, txs and header metadata.
    pub merkle_root: String,
    /// Declared aggregate root over child block hashes.
    pub chain_root: String,
    /// Declared distance score.
    pub distance: U256,
    /// Mining nonce.
    pub nonce: String,
    /// Energy grant for this block.
    pub nrg_grant: u64,
    /// Opaque transaction references, in block order.
    #[serde(default)]
    pub txs: Vec<String>,
    /// Fingerprint of the set of child blockchains this block merges.
    pub blockchain_fingerprints_root: String,
    /// Referenced child headers, per chain, in ascending height order.
    pub blockchain_headers: HeadersByChain,
}

impl Block {
    /// Total number of child headers across all chains.
    pub fn child_header_count(&self) -> usize {
        self.blockchain_headers.values().map(Vec::len).sum()
    }

    /// Number of chains that carry at least one header.
    pub fn populated_chain_count(&self) -> usize {
        self.blockchain_headers
            .values()
            .filter(|headers| !headers.is_empty())
            .count()
    }

    /// Header metadata tuple appended to the merkle input, in consensus order.
    pub fn header_metadata(&self) -> [String; 5] {
        [
            self.miner.clone(),
            self.height.to_string(),
            self.version.to_string(),
            self.schema_version.to_string(),
            self.nrg_grant.to_string(),
        ]
    }

    /// Short form of the block hash for log lines.
    pub fn short_hash(&self) -> &str {
        let end = self
            .hash
            .char_indices()
            .nth(8)
            .map_or(self.hash.len(), |(idx, _)| idx);
        &self.hash[..end]
    }
}
