//! # Braid Telemetry
//!
//! Logging setup shared by the validator binaries.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use braid_telemetry::{init_tracing, TelemetryConfig};
//!
//! fn main() -> anyhow::Result<()> {
//!     init_tracing(&TelemetryConfig::from_env())?;
//!     // Spans and events from every crate now reach stderr
//!     Ok(())
//! }
//! ```
//!
//! ## Environment Variables
//!
//! | Variable | Default | Description |
//! |----------|---------|-------------|
//! | `OTEL_SERVICE_NAME` | `braid-validator` | Service name in log lines |
//! | `BC_LOG_LEVEL` / `RUST_LOG` | `info` | Level filter or `EnvFilter` directive |
//! | `BC_CONSOLE_OUTPUT` | `true` | Write logs to stderr |
//! | `BC_JSON_LOGS` | `false` (`true` in containers) | JSON log lines |
//! | `BC_NETWORK` | `testnet` | Network identifier |

mod config;
mod logging;
mod tracing_setup;

pub use config::{TelemetryConfig, DEFAULT_SERVICE_NAME};
pub use tracing_setup::{build_filter, init_tracing};

use thiserror::Error;

/// Telemetry initialization errors
#[derive(Error, Debug)]
pub enum TelemetryError {
    #[error("Invalid log filter {directive:?}: {reason}")]
    Filter { directive: String, reason: String },

    #[error("Failed to install tracing subscriber: {0}")]
    SubscriberInit(String),
}

/// Convenience macro for a span scoped to one block.
///
/// ```rust,ignore
/// let span = block_span!("validate_block", block.height, block.short_hash());
/// let _guard = span.enter();
/// ```
#[macro_export]
macro_rules! block_span {
    ($name:expr, $block_height:expr, $block_hash:expr $(, $($field:tt)*)?) => {
        tracing::info_span!(
            $name,
            block_height = $block_height,
            block_hash = %$block_hash
            $(, $($field)*)?
        )
    };
}
