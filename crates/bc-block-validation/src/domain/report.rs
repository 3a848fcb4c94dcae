//! Per-stage validation results

use super::{Stage, ValidationMode};
use serde::{Deserialize, Serialize};

/// Result of evaluating one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageOutcome {
    pub stage: Stage,
    pub passed: bool,
}

/// Outcome of running the pipeline over one block.
///
/// In short-circuit mode `outcomes` stops at the first failing stage; in
/// exhaustive mode it always holds all six stages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationReport {
    pub block_hash: String,
    pub block_height: u64,
    pub mode: ValidationMode,
    pub outcomes: Vec<StageOutcome>,
}

impl ValidationReport {
    /// A block is valid only when every stage was evaluated and passed.
    pub fn is_valid(&self) -> bool {
        self.outcomes.len() == Stage::ALL.len() && self.outcomes.iter().all(|o| o.passed)
    }

    /// First stage that failed, in evaluation order.
    pub fn first_failure(&self) -> Option<Stage> {
        self.outcomes.iter().find(|o| !o.passed).map(|o| o.stage)
    }

    /// Every failed stage that was evaluated.
    pub fn failed_stages(&self) -> Vec<Stage> {
        self.outcomes
            .iter()
            .filter(|o| !o.passed)
            .map(|o| o.stage)
            .collect()
    }

    /// Result of `stage`, or `None` if it was skipped.
    pub fn outcome(&self, stage: Stage) -> Option<bool> {
        self.outcomes
            .iter()
            .find(|o| o.stage == stage)
            .map(|o| o.passed)
    }

    /// Stages evaluated before the pipeline stopped.
    pub fn evaluated(&self) -> usize {
        self.outcomes.len()
    }
}
