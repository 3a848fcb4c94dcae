use crate::domain::{Block, ChildHeader, GenesisConstants, MalformedBlock, Stage};
use bc_compute::{mining_digest, ComputeEngine, ComputeError};

/// Stateless consensus rules for braided blocks.
///
/// Each stage is a pure predicate over the block, the genesis constants
/// and, for recomputation stages, the compute engine.
pub struct BlockValidator;

impl BlockValidator {
    /// Reject inputs that cannot be judged (upstream or decoding bugs).
    pub fn check_well_formed(block: &Block) -> Result<(), MalformedBlock> {
        if block.miner.is_empty() {
            return Err(MalformedBlock::EmptyField("miner"));
        }
        if block.previous_hash.is_empty() {
            return Err(MalformedBlock::EmptyField("previous_hash"));
        }
        if block.nonce.is_empty() {
            return Err(MalformedBlock::EmptyField("nonce"));
        }

        for (chain, headers) in &block.blockchain_headers {
            if chain.is_empty() {
                return Err(MalformedBlock::EmptyChainName);
            }

            for (index, header) in headers.iter().enumerate() {
                if header.blockchain != *chain {
                    return Err(MalformedBlock::ChainKeyMismatch {
                        key: chain.clone(),
                        declared: header.blockchain.clone(),
                    });
                }

                // Opaque payload: only emptiness is malformed
                if header.hash.is_empty() {
                    return Err(MalformedBlock::EmptyChildHash {
                        chain: chain.clone(),
                        index,
                    });
                }
            }
        }

        Ok(())
    }

    /// Stage 1: block declares the genesis fingerprint verbatim.
    pub fn genesis_fingerprint(block: &Block, genesis: &GenesisConstants) -> bool {
        block.blockchain_fingerprints_root == genesis.blockchain_fingerprints_root
    }

    /// Stage 2: exactly `child_blockchain_count` chains carry headers.
    ///
    /// Chains present with an empty sequence do not count.
    pub fn child_chain_count(block: &Block, genesis: &GenesisConstants) -> bool {
        block.populated_chain_count() as u64 == genesis.child_blockchain_count
    }

    /// Stage 3: headers strictly ascend by height within every chain.
    ///
    /// Empty chains pass here; emptiness is rejected by stage 2.
    pub fn header_ordering(block: &Block) -> bool {
        block
            .blockchain_headers
            .values()
            .all(|headers| is_strictly_ascending(headers))
    }

    /// Stage 4: declared chain root equals the recomputed aggregate.
    pub fn chain_root(block: &Block, engine: &dyn ComputeEngine) -> Result<bool, ComputeError> {
        let hashes = engine.flatten_headers(&block.blockchain_headers);
        let expected = engine.aggregate_root_hash(&hashes)?;
        Ok(expected == block.chain_root)
    }

    /// Stage 5: declared merkle root equals the recomputed tree.
    pub fn merkle_root(block: &Block, engine: &dyn ComputeEngine) -> Result<bool, ComputeError> {
        let expected = engine.merkle_root(&Self::merkle_input(block, engine))?;
        Ok(expected == block.merkle_root)
    }

    /// Stage 6: declared distance equals the recomputed score.
    pub fn distance(block: &Block, engine: &dyn ComputeEngine) -> Result<bool, ComputeError> {
        let work = engine.prepare_work(&block.previous_hash, &block.blockchain_headers)?;
        let digest = mining_digest(
            engine,
            &block.miner,
            &block.merkle_root,
            &block.nonce,
            block.timestamp,
        );
        let expected = engine.distance(&work, &digest)?;
        Ok(expected == block.distance)
    }

    /// Merkle leaves in consensus order: child hashes, txs, header metadata.
    pub fn merkle_input(block: &Block, engine: &dyn ComputeEngine) -> Vec<String> {
        let mut input = engine.flatten_headers(&block.blockchain_headers);
        input.reserve(block.txs.len() + 5);
        input.extend(block.txs.iter().cloned());
        input.extend(block.header_metadata());
        input
    }

    /// Evaluate one stage.
    pub fn evaluate(
        stage: Stage,
        block: &Block,
        genesis: &GenesisConstants,
        engine: &dyn ComputeEngine,
    ) -> Result<bool, ComputeError> {
        match stage {
            Stage::GenesisFingerprint => Ok(Self::genesis_fingerprint(block, genesis)),
            Stage::ChildChainCount => Ok(Self::child_chain_count(block, genesis)),
            Stage::HeaderOrdering => Ok(Self::header_ordering(block)),
            Stage::ChainRoot => Self::chain_root(block, engine),
            Stage::MerkleRoot => Self::merkle_root(block, engine),
            Stage::Distance => Self::distance(block, engine),
        }
    }
}

/// Strict height increase between every adjacent pair. Gaps are allowed.
pub fn is_strictly_ascending(headers: &[ChildHeader]) -> bool {
    headers
        .windows(2)
        .all(|pair| pair[0].height < pair[1].height)
}
