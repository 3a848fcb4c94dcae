//! Validation Service - the six-stage pipeline
//!
//! # Architecture
//! - Stages run in fixed order, cheapest first
//! - Stateless checks live in `validation.rs`; this layer sequences them,
//!   reports to the observer and records metrics
//! - Safe to call concurrently: the pipeline holds only shared, read-only state

use crate::adapters::TracingObserver;
use crate::domain::{
    Block, GenesisConstants, Stage, StageOutcome, ValidationConfig, ValidationError,
    ValidationMode, ValidationReport, ValidationResult,
};
use crate::events::ValidationEvent;
use crate::metrics;
use crate::ports::{BlockValidationApi, ValidationObserver};
use crate::validation::BlockValidator;
use bc_compute::ComputeEngine;
use braid_telemetry::block_span;
use rayon::prelude::*;
use std::sync::Arc;
use std::time::Instant;

/// Block validation pipeline
///
/// Holds the genesis constants for the network and the compute engine the
/// recomputation stages delegate to.
pub struct ValidationPipeline {
    genesis: Arc<GenesisConstants>,
    compute: Arc<dyn ComputeEngine>,
    observer: Arc<dyn ValidationObserver>,
    config: ValidationConfig,
}

impl ValidationPipeline {
    /// Create a pipeline that logs through `tracing`.
    pub fn new(genesis: GenesisConstants, compute: Arc<dyn ComputeEngine>) -> Self {
        Self {
            genesis: Arc::new(genesis),
            compute,
            observer: Arc::new(TracingObserver),
            config: ValidationConfig::default(),
        }
    }

    /// Replace the observer (for example with a `RecordingObserver` in tests)
    pub fn with_observer(mut self, observer: Arc<dyn ValidationObserver>) -> Self {
        self.observer = observer;
        self
    }

    pub fn with_config(mut self, config: ValidationConfig) -> Self {
        self.config = config;
        self
    }

    /// Genesis constants this pipeline validates against.
    pub fn genesis(&self) -> &GenesisConstants {
        &self.genesis
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validate many blocks in parallel. Results keep input order.
    pub fn validate_batch(&self, blocks: &[Block]) -> Vec<ValidationResult<bool>> {
        blocks
            .par_iter()
            .map(|block| self.is_valid_block(block))
            .collect()
    }

    fn run(&self, block: &Block, mode: ValidationMode) -> ValidationResult<ValidationReport> {
        let span = block_span!("validate_block", block.height, block.short_hash(), ?mode);
        let _guard = span.enter();
        let started = Instant::now();

        if let Err(error) = BlockValidator::check_well_formed(block) {
            self.observer.on_event(&ValidationEvent::Malformed {
                block_hash: block.hash.clone(),
                error: error.clone(),
            });
            if self.config.record_metrics {
                metrics::record_block_malformed();
            }
            return Err(error.into());
        }

        let mut outcomes = Vec::with_capacity(Stage::ALL.len());
        for stage in Stage::ALL {
            let passed = match BlockValidator::evaluate(
                stage,
                block,
                &self.genesis,
                self.compute.as_ref(),
            ) {
                Ok(passed) => passed,
                Err(error) => {
                    self.observer.on_event(&ValidationEvent::ComputeFailed {
                        block_hash: block.hash.clone(),
                        stage,
                        error: error.clone(),
                    });
                    if self.config.record_metrics {
                        metrics::record_compute_failure(stage.name());
                    }
                    return Err(ValidationError::Compute(error));
                }
            };

            self.observer.on_event(&ValidationEvent::StageEvaluated {
                block_hash: block.hash.clone(),
                block_height: block.height,
                stage,
                passed,
            });
            outcomes.push(StageOutcome { stage, passed });

            if !passed && mode == ValidationMode::ShortCircuit {
                break;
            }
        }

        let report = ValidationReport {
            block_hash: block.hash.clone(),
            block_height: block.height,
            mode,
            outcomes,
        };

        if self.config.record_metrics {
            metrics::record_validation_latency(started.elapsed().as_secs_f64());
            match report.first_failure() {
                None => metrics::record_block_validated(),
                Some(stage) => metrics::record_block_rejected(stage.name()),
            }
        }

        self.observer.on_event(&ValidationEvent::Completed {
            report: report.clone(),
        });

        Ok(report)
    }
}

impl BlockValidationApi for ValidationPipeline {
    fn is_valid_block(&self, block: &Block) -> ValidationResult<bool> {
        self.run(block, ValidationMode::ShortCircuit)
            .map(|report| report.is_valid())
    }

    fn validate(&self, block: &Block) -> ValidationResult<ValidationReport> {
        self.run(block, self.config.mode)
    }

    fn diagnose(&self, block: &Block) -> ValidationResult<ValidationReport> {
        self.run(block, ValidationMode::Exhaustive)
    }
}
