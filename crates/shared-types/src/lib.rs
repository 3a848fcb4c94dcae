//! # Shared Types Crate
//!
//! Domain entities shared by the compute engine and the validation pipeline.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: `Block` and `ChildHeader` are defined once here.
//! - **Canonical Ordering**: child headers live in a `BTreeMap`, so every node
//!   iterates chains in the same order without extra sorting.

pub mod entities;

pub use entities::*;
