//! CPU compute backend using Rayon
//!
//! This is the default backend. It hashes merkle levels and other batches
//! in parallel across CPU cores.

use crate::tasks::hashing::blake2bl;
use crate::{Backend, ComputeEngine};
use rayon::prelude::*;

/// Batches below this size are hashed on the calling thread.
const PARALLEL_THRESHOLD: usize = 16;

/// CPU-based compute engine using Rayon
pub struct CpuEngine {
    threads: usize,
}

impl CpuEngine {
    pub fn new() -> Self {
        Self {
            threads: rayon::current_num_threads(),
        }
    }

    /// Worker threads available to the rayon pool.
    pub fn thread_count(&self) -> usize {
        self.threads
    }
}

impl Default for CpuEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ComputeEngine for CpuEngine {
    fn backend(&self) -> Backend {
        Backend::Cpu
    }

    fn hash(&self, data: &[u8]) -> String {
        blake2bl(data)
    }

    fn batch_hash(&self, inputs: &[Vec<u8>]) -> Vec<String> {
        if inputs.len() < PARALLEL_THRESHOLD {
            return inputs.iter().map(|input| blake2bl(input)).collect();
        }

        inputs.par_iter().map(|input| blake2bl(input)).collect()
    }
}
