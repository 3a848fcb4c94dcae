//! Compute backends
//!
//! Every backend must be bit-identical to the reference tasks; backends only
//! differ in how they schedule the hashing work.

#[cfg(feature = "cpu")]
pub mod cpu;

pub mod sequential;
