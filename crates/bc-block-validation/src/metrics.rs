//! # Validation Metrics
//!
//! Prometheus metrics for monitoring block validation.
//!
//! ## Usage
//!
//! Enable with the `metrics` feature:
//! ```toml
//! bc-block-validation = { path = "...", features = ["metrics"] }
//! ```
//!
//! ## Metrics Exported
//!
//! - `bc_blocks_validated_total` - Counter of blocks that passed every stage
//! - `bc_blocks_rejected_total` - Counter of rejected blocks (by first failing stage)
//! - `bc_blocks_malformed_total` - Counter of structurally malformed inputs
//! - `bc_compute_failures_total` - Counter of compute engine faults (by stage)
//! - `bc_validation_latency_seconds` - Histogram of pipeline run times

#[cfg(feature = "metrics")]
use lazy_static::lazy_static;

#[cfg(feature = "metrics")]
use prometheus::{
    register_counter_vec, register_histogram, register_int_counter, register_int_counter_vec,
    CounterVec, Histogram, IntCounter, IntCounterVec,
};

#[cfg(feature = "metrics")]
lazy_static! {
    /// Total blocks that passed every stage
    pub static ref BLOCKS_VALIDATED: IntCounter = register_int_counter!(
        "bc_blocks_validated_total",
        "Total number of blocks that passed every validation stage"
    )
    .expect("Failed to create BLOCKS_VALIDATED metric");

    /// Total blocks rejected, labeled by the first failing stage
    pub static ref BLOCKS_REJECTED: CounterVec = register_counter_vec!(
        "bc_blocks_rejected_total",
        "Total number of blocks rejected",
        &["stage"]
    )
    .expect("Failed to create BLOCKS_REJECTED metric");

    /// Total inputs rejected as structurally malformed
    pub static ref BLOCKS_MALFORMED: IntCounter = register_int_counter!(
        "bc_blocks_malformed_total",
        "Total number of blocks rejected as malformed input"
    )
    .expect("Failed to create BLOCKS_MALFORMED metric");

    /// Total compute engine faults, labeled by the stage that hit them
    pub static ref COMPUTE_FAILURES: IntCounterVec = register_int_counter_vec!(
        "bc_compute_failures_total",
        "Total number of compute engine failures during validation",
        &["stage"]
    )
    .expect("Failed to create COMPUTE_FAILURES metric");

    /// Histogram of block validation latency
    pub static ref VALIDATION_LATENCY: Histogram = register_histogram!(
        "bc_validation_latency_seconds",
        "Time taken to validate a block in seconds",
        vec![0.0001, 0.0005, 0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]
    )
    .expect("Failed to create VALIDATION_LATENCY metric");
}

/// Record a block that passed every stage
#[cfg(feature = "metrics")]
pub fn record_block_validated() {
    BLOCKS_VALIDATED.inc();
}

/// Record a rejected block with the first failing stage
#[cfg(feature = "metrics")]
pub fn record_block_rejected(stage: &str) {
    BLOCKS_REJECTED.with_label_values(&[stage]).inc();
}

/// Record a structurally malformed input
#[cfg(feature = "metrics")]
pub fn record_block_malformed() {
    BLOCKS_MALFORMED.inc();
}

/// Record a compute engine fault in `stage`
#[cfg(feature = "metrics")]
pub fn record_compute_failure(stage: &str) {
    COMPUTE_FAILURES.with_label_values(&[stage]).inc();
}

/// Record validation latency
#[cfg(feature = "metrics")]
pub fn record_validation_latency(seconds: f64) {
    VALIDATION_LATENCY.observe(seconds);
}

// No-op implementations when metrics feature is disabled
#[cfg(not(feature = "metrics"))]
pub fn record_block_validated() {}

#[cfg(not(feature = "metrics"))]
pub fn record_block_rejected(_stage: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_block_malformed() {}

#[cfg(not(feature = "metrics"))]
pub fn record_compute_failure(_stage: &str) {}

#[cfg(not(feature = "metrics"))]
pub fn record_validation_latency(_seconds: f64) {}
