//! Events published to the validation observer
//!
//! The pipeline never logs directly. It reports what happened through these
//! events and the observer decides what to do with them (trace, count, drop).

use crate::domain::{MalformedBlock, Stage, ValidationReport};
use bc_compute::ComputeError;

/// Something observable that happened while validating one block.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ValidationEvent {
    /// A stage finished evaluating.
    StageEvaluated {
        block_hash: String,
        block_height: u64,
        stage: Stage,
        passed: bool,
    },

    /// The pipeline finished and produced a report.
    Completed { report: ValidationReport },

    /// The block could not be judged because it is malformed.
    Malformed {
        block_hash: String,
        error: MalformedBlock,
    },

    /// The compute engine failed while evaluating a stage.
    ComputeFailed {
        block_hash: String,
        stage: Stage,
        error: ComputeError,
    },
}

impl ValidationEvent {
    /// Hash of the block the event refers to.
    pub fn block_hash(&self) -> &str {
        match self {
            ValidationEvent::StageEvaluated { block_hash, .. }
            | ValidationEvent::Malformed { block_hash, .. }
            | ValidationEvent::ComputeFailed { block_hash, .. } => block_hash,
            ValidationEvent::Completed { report } => &report.block_hash,
        }
    }
}
