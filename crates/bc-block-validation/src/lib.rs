//! # bc-block-validation
//!
//! Consensus validation for braided blocks.
//!
//! ## Architecture
//!
//! A braided block summarizes headers from several child blockchains. Before
//! it is accepted it must pass six rules, evaluated in a fixed order so the
//! cheap structural checks reject most bad blocks before any hashing runs:
//!
//! ```text
//! GenesisFingerprint → ChildChainCount → HeaderOrdering
//!        → ChainRoot → MerkleRoot → Distance
//!          └──────── ComputeEngine ────────┘
//! ```
//!
//! The consensus path (`is_valid_block`) stops at the first failing rule.
//! `diagnose` evaluates every rule and reports all of them.
//!
//! A block that breaks a rule is not an error. `Err` is reserved for blocks
//! that cannot be judged: malformed input or a fault in the compute engine.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bc_block_validation::{BlockValidationApi, GenesisConstants, ValidationPipeline};
//!
//! let genesis = GenesisConstants::load(None)?;
//! let pipeline = ValidationPipeline::new(genesis, bc_compute::auto_detect());
//!
//! if pipeline.is_valid_block(&block)? {
//!     // hand off to storage
//! }
//! ```

pub mod adapters;
pub mod domain;
pub mod events;
pub mod metrics;
pub mod ports;
pub mod service;
pub mod validation;

// Re-export main types
pub use adapters::{RecordingObserver, TracingObserver};
pub use domain::{
    decode_block, Block, ChildHeader, GenesisConstants, GenesisError, HeadersByChain,
    MalformedBlock, Stage, StageOutcome, ValidationConfig, ValidationError, ValidationMode,
    ValidationReport, ValidationResult,
};
pub use events::ValidationEvent;
pub use ports::{BlockValidationApi, NoopObserver, ValidationObserver};
pub use service::ValidationPipeline;
pub use validation::BlockValidator;
