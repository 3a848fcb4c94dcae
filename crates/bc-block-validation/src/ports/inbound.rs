//! Driving ports (Inbound API)

use crate::domain::{Block, ValidationReport, ValidationResult};

/// Primary block validation API
///
/// Invalid blocks are `Ok(false)` / a failing report. `Err` is reserved for
/// inputs that cannot be judged (malformed blocks, compute faults).
pub trait BlockValidationApi: Send + Sync {
    /// Consensus decision: short-circuits on the first failing stage.
    fn is_valid_block(&self, block: &Block) -> ValidationResult<bool>;

    /// Validate using the configured mode and return per-stage results.
    fn validate(&self, block: &Block) -> ValidationResult<ValidationReport>;

    /// Evaluate every stage regardless of failures.
    ///
    /// Useful for rejecting peers that break several rules at once.
    fn diagnose(&self, block: &Block) -> ValidationResult<ValidationReport>;
}
