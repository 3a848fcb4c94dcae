//! # Genesis Constants
//!
//! Network-wide parameters every block is checked against. Loaded once at
//! startup from a trusted source and shared read-only by all validations.
//!
//! ## Sources (first match wins)
//!
//! 1. JSON file (`--genesis` / `BC_GENESIS_PATH`)
//! 2. Environment variables
//!
//! | Variable | Description |
//! |----------|-------------|
//! | `BC_GENESIS_PATH` | Path to a genesis JSON file |
//! | `BC_GENESIS_FINGERPRINTS_ROOT` | Fingerprint of the child chain set |
//! | `BC_CHILD_BLOCKCHAIN_COUNT` | Number of child chains each block must reference |

use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};
use thiserror::Error;

pub const ENV_GENESIS_PATH: &str = "BC_GENESIS_PATH";
pub const ENV_FINGERPRINTS_ROOT: &str = "BC_GENESIS_FINGERPRINTS_ROOT";
pub const ENV_CHILD_BLOCKCHAIN_COUNT: &str = "BC_CHILD_BLOCKCHAIN_COUNT";

/// Genesis loading errors.
#[derive(Debug, Error)]
pub enum GenesisError {
    /// Genesis file could not be read.
    #[error("Failed to read genesis file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Genesis JSON did not match the expected shape.
    #[error("Failed to parse genesis: {0}")]
    Parse(#[from] serde_json::Error),

    /// Required environment variable is unset.
    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),

    /// Environment variable is set but unparseable.
    #[error("Environment variable {var} has invalid value {value:?}")]
    InvalidEnv { var: &'static str, value: String },

    /// Values parsed but cannot describe a real network.
    #[error("Invalid genesis configuration: {0}")]
    InvalidConfig(String),
}

/// Immutable genesis parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenesisConstants {
    /// Fingerprint every valid block must declare verbatim.
    pub blockchain_fingerprints_root: String,
    /// Exact number of child chains that must carry headers.
    pub child_blockchain_count: u64,
}

impl GenesisConstants {
    pub fn new(blockchain_fingerprints_root: impl Into<String>, child_blockchain_count: u64) -> Self {
        Self {
            blockchain_fingerprints_root: blockchain_fingerprints_root.into(),
            child_blockchain_count,
        }
    }

    /// Parse and validate genesis constants from JSON.
    pub fn from_json_str(json: &str) -> Result<Self, GenesisError> {
        let genesis: Self = serde_json::from_str(json)?;
        genesis.validate()?;
        Ok(genesis)
    }

    /// Read, parse and validate a genesis JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, GenesisError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| GenesisError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Build genesis constants from environment variables.
    pub fn from_env() -> Result<Self, GenesisError> {
        let fingerprint = env::var(ENV_FINGERPRINTS_ROOT)
            .map_err(|_| GenesisError::MissingEnv(ENV_FINGERPRINTS_ROOT))?;
        let count_raw = env::var(ENV_CHILD_BLOCKCHAIN_COUNT)
            .map_err(|_| GenesisError::MissingEnv(ENV_CHILD_BLOCKCHAIN_COUNT))?;
        let count = count_raw
            .trim()
            .parse::<u64>()
            .map_err(|_| GenesisError::InvalidEnv {
                var: ENV_CHILD_BLOCKCHAIN_COUNT,
                value: count_raw.clone(),
            })?;

        let genesis = Self::new(fingerprint, count);
        genesis.validate()?;
        Ok(genesis)
    }

    /// Load from `path` if given, else `BC_GENESIS_PATH`, else the environment.
    pub fn load(path: Option<&Path>) -> Result<Self, GenesisError> {
        if let Some(path) = path {
            return Self::from_json_file(path);
        }
        if let Ok(path) = env::var(ENV_GENESIS_PATH) {
            return Self::from_json_file(path);
        }
        Self::from_env()
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), GenesisError> {
        if self.blockchain_fingerprints_root.trim().is_empty() {
            return Err(GenesisError::InvalidConfig(
                "Fingerprints root must not be empty".to_string(),
            ));
        }

        if self.child_blockchain_count == 0 {
            return Err(GenesisError::InvalidConfig(
                "Child blockchain count must be at least 1".to_string(),
            ));
        }

        Ok(())
    }
}
