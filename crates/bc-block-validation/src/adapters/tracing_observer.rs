//! Tracing adapter
//!
//! Implements the ValidationObserver port by emitting `tracing` events
//! through the shared block logging macros.

use crate::events::ValidationEvent;
use crate::ports::ValidationObserver;
use braid_telemetry::{log_block_event, log_stage_event};
use tracing::warn;

/// `component` field on every line this adapter writes.
pub const COMPONENT: &str = "block-validation";

/// Logs every validation event through `tracing`.
///
/// Passing stages are `debug`, failing stages and rejections are `info`,
/// malformed input and compute faults are `warn`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingObserver;

impl ValidationObserver for TracingObserver {
    fn on_event(&self, event: &ValidationEvent) {
        match event {
            ValidationEvent::StageEvaluated {
                block_hash,
                block_height,
                stage,
                passed: true,
            } => {
                log_stage_event!(
                    debug,
                    COMPONENT,
                    "Stage passed",
                    block_hash,
                    stage,
                    block_height = *block_height
                );
            }
            ValidationEvent::StageEvaluated {
                block_hash,
                block_height,
                stage,
                passed: false,
            } => {
                log_stage_event!(
                    info,
                    COMPONENT,
                    "Stage failed",
                    block_hash,
                    stage,
                    block_height = *block_height
                );
            }
            ValidationEvent::Completed { report } if report.is_valid() => {
                log_block_event!(
                    debug,
                    COMPONENT,
                    "Block valid",
                    report.block_height,
                    report.block_hash
                );
            }
            ValidationEvent::Completed { report } => {
                let failed: Vec<&str> = report.failed_stages().iter().map(|s| s.name()).collect();
                log_block_event!(
                    info,
                    COMPONENT,
                    "Block rejected",
                    report.block_height,
                    report.block_hash,
                    evaluated = report.evaluated(),
                    failed = ?failed
                );
            }
            ValidationEvent::Malformed { block_hash, error } => {
                warn!(
                    component = COMPONENT,
                    block_hash = %block_hash,
                    error = %error,
                    "Malformed block"
                );
            }
            ValidationEvent::ComputeFailed {
                block_hash,
                stage,
                error,
            } => {
                log_stage_event!(
                    warn,
                    COMPONENT,
                    "Compute engine failed",
                    block_hash,
                    stage,
                    error = %error
                );
            }
        }
    }
}
