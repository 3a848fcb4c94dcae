//! Domain layer for block validation
//!
//! - block: entities and wire decoding
//! - genesis: network constants and their loaders
//! - stage: the six consensus rules, in order
//! - report: per-stage outcomes
//! - config: pipeline modes
//! - error: malformed-input and compute faults

mod block;
mod config;
mod error;
mod genesis;
mod report;
mod stage;

pub use block::*;
pub use config::*;
pub use error::*;
pub use genesis::*;
pub use report::*;
pub use stage::*;
