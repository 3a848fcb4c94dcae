//! # BC-Compute: Consensus Compute Engine
//!
//! The compute collaborator behind block validation. Every operation the
//! validation pipeline delegates (header flattening, aggregate roots, merkle
//! roots, work preparation, distance scoring and the digest primitive) goes
//! through the [`ComputeEngine`] trait.
//!
//! ## Backends
//!
//! 1. **CPU/Rayon** - parallel batch hashing across cores (default)
//! 2. **Sequential** - single-threaded reference engine, zero extra deps
//!
//! Both backends produce identical output. Only throughput differs.
//!
//! ## Determinism
//!
//! Every operation here is consensus-critical: two nodes fed the same input
//! must produce the same bytes. Ordering of inputs is significant and is
//! never normalized.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bc_compute::auto_detect;
//!
//! let engine = auto_detect();
//! let root = engine.aggregate_root_hash(&engine.flatten_headers(&block.blockchain_headers))?;
//! ```

pub mod backends;
pub mod tasks;

use shared_types::{HeadersByChain, U256};
use std::fmt;
use std::sync::Arc;
use thiserror::Error;

pub use tasks::hashing::blake2bl;
pub use tasks::work::mining_digest;

/// Compute backend identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
    /// CPU with Rayon parallelism
    Cpu,
    /// Single-threaded reference implementation
    Sequential,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Cpu => write!(f, "CPU (Rayon)"),
            Backend::Sequential => write!(f, "Sequential"),
        }
    }
}

/// Compute engine errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ComputeError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Compute task failed: {0}")]
    TaskFailed(String),
}

/// Output of work preparation: a hex digest binding the previous block to
/// the current child-chain evidence.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct WorkValue(String);

impl WorkValue {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for WorkValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Compute engine trait - implemented by all backends
///
/// Only [`ComputeEngine::hash`] is required. The remaining operations have
/// reference implementations in [`tasks`] built on top of it; a backend may
/// override any of them as long as the output stays bit-identical.
pub trait ComputeEngine: Send + Sync {
    /// Get backend type
    fn backend(&self) -> Backend {
        Backend::Sequential
    }

    /// Content-addressed digest of `data`, as lowercase hex.
    fn hash(&self, data: &[u8]) -> String;

    /// Hash many independent inputs. Output order matches input order.
    fn batch_hash(&self, inputs: &[Vec<u8>]) -> Vec<String> {
        inputs.iter().map(|input| self.hash(input)).collect()
    }

    /// Flatten child headers into their hashes: chain order, then sequence order.
    fn flatten_headers(&self, headers: &HeadersByChain) -> Vec<String> {
        tasks::headers::flatten_headers(headers)
    }

    /// Ordered digest over a sequence of child block hashes.
    fn aggregate_root_hash(&self, hashes: &[String]) -> Result<String, ComputeError> {
        tasks::headers::aggregate_root_hash(self, hashes)
    }

    /// Merkle root over an ordered sequence of opaque items.
    fn merkle_root(&self, items: &[String]) -> Result<String, ComputeError> {
        tasks::merkle::MerkleRootTask::new(items.to_vec()).execute(self)
    }

    /// Work value from the previous block hash and the current child evidence.
    fn prepare_work(
        &self,
        previous_hash: &str,
        headers: &HeadersByChain,
    ) -> Result<WorkValue, ComputeError> {
        tasks::work::prepare_work(self, previous_hash, headers)
    }

    /// Distance score between a work value and a mining digest.
    fn distance(&self, work: &WorkValue, digest: &str) -> Result<U256, ComputeError> {
        tasks::work::distance(work, digest)
    }
}

/// Auto-detect and create the best available compute engine
pub fn auto_detect() -> Arc<dyn ComputeEngine> {
    #[cfg(feature = "cpu")]
    {
        let engine = backends::cpu::CpuEngine::new();
        tracing::info!(
            "Using CPU compute: {} threads (Rayon)",
            engine.thread_count()
        );
        Arc::new(engine)
    }

    #[cfg(not(feature = "cpu"))]
    {
        tracing::info!("Using sequential compute engine");
        Arc::new(backends::sequential::SequentialEngine)
    }
}

/// Create a specific backend
pub fn create_backend(backend: Backend) -> Result<Arc<dyn ComputeEngine>, ComputeError> {
    match backend {
        Backend::Cpu => {
            #[cfg(feature = "cpu")]
            {
                Ok(Arc::new(backends::cpu::CpuEngine::new()))
            }
            #[cfg(not(feature = "cpu"))]
            {
                Err(ComputeError::TaskFailed(
                    "CPU backend not compiled in (enable the `cpu` feature)".to_string(),
                ))
            }
        }
        Backend::Sequential => Ok(Arc::new(backends::sequential::SequentialEngine)),
    }
}
