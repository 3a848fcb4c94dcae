//! Error types for block validation
//!
//! A block failing a consensus rule is NOT an error: stages return `false`
//! and the report says which rule failed. Errors here mean the input could
//! not be judged at all.

use bc_compute::ComputeError;

/// Structural faults that indicate a deserialization or upstream bug
/// rather than a consensus violation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedBlock {
    #[error("Child chain with an empty name")]
    EmptyChainName,

    #[error("Header filed under chain {key:?} claims chain {declared:?}")]
    ChainKeyMismatch { key: String, declared: String },

    #[error("Child header {index} on chain {chain:?} has an empty hash")]
    EmptyChildHash { chain: String, index: usize },

    #[error("Required field is empty: {0}")]
    EmptyField(&'static str),
}

/// Block validation error types
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Malformed block: {0}")]
    Malformed(#[from] MalformedBlock),

    #[error("Block could not be decoded: {0}")]
    Decode(String),

    #[error("Compute engine failure: {0}")]
    Compute(#[from] ComputeError),
}

impl From<serde_json::Error> for ValidationError {
    fn from(err: serde_json::Error) -> Self {
        ValidationError::Decode(err.to_string())
    }
}

/// Result type for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
