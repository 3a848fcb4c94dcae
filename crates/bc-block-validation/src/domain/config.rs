//! Pipeline configuration

use serde::{Deserialize, Serialize};

/// How many stages the pipeline evaluates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMode {
    /// Stop at the first failing stage (consensus path).
    #[default]
    ShortCircuit,
    /// Evaluate every stage and report all results (diagnostics).
    Exhaustive,
}

/// Configuration for the validation pipeline
#[derive(Debug, Clone)]
pub struct ValidationConfig {
    /// Mode used by `validate`. `is_valid_block` always short-circuits.
    pub mode: ValidationMode,
    /// Record prometheus metrics (no-op unless the `metrics` feature is on).
    pub record_metrics: bool,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            mode: ValidationMode::ShortCircuit,
            record_metrics: true,
        }
    }
}

impl ValidationConfig {
    /// Configuration for peer diagnostics: run every stage.
    pub fn exhaustive() -> Self {
        Self {
            mode: ValidationMode::Exhaustive,
            ..Default::default()
        }
    }
}
