//! Single-threaded reference backend
//!
//! Uses the provided trait methods unchanged. Handy for tests and for
//! builds without the `cpu` feature.

use crate::tasks::hashing::blake2bl;
use crate::{Backend, ComputeEngine};

/// Sequential compute engine using the reference tasks as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct SequentialEngine;

impl ComputeEngine for SequentialEngine {
    fn backend(&self) -> Backend {
        Backend::Sequential
    }

    fn hash(&self, data: &[u8]) -> String {
        blake2bl(data)
    }
}
