//! Reference compute tasks
//!
//! These are the consensus definitions of each compute operation. Backends
//! reuse them through the provided methods of [`crate::ComputeEngine`].

pub mod hashing;
pub mod headers;
pub mod merkle;
pub mod work;
