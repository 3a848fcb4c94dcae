//! Library half of `bc-validate`, split out so the command can be tested
//! without spawning a process.

use std::fmt::Write as _;
use std::path::PathBuf;

use anyhow::{Context, Result};
use bc_block_validation::{
    decode_block, BlockValidationApi, GenesisConstants, Stage, ValidationPipeline,
    ValidationReport,
};
use bc_compute::Backend;
use braid_telemetry::log_block_event;
use clap::{Parser, ValueEnum};

pub const EXIT_VALID: u8 = 0;
pub const EXIT_INVALID: u8 = 1;
pub const EXIT_ERROR: u8 = 2;

/// bc-validate: braided block validator
#[derive(Parser, Debug)]
#[command(name = "bc-validate")]
#[command(about = "Validate a braided block JSON file against genesis constants")]
pub struct Args {
    /// Block JSON file
    pub block: PathBuf,

    /// Genesis JSON file (falls back to BC_GENESIS_PATH, then BC_GENESIS_* variables)
    #[arg(short, long)]
    pub genesis: Option<PathBuf>,

    /// Evaluate every stage instead of stopping at the first failure
    #[arg(short, long)]
    pub diagnose: bool,

    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,

    /// Compute backend
    #[arg(long, value_enum, default_value_t = BackendArg::Auto)]
    pub backend: BackendArg,

    /// Log level filter, overrides BC_LOG_LEVEL
    #[arg(long)]
    pub log_level: Option<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    Auto,
    Cpu,
    Sequential,
}

/// What the command prints and how it exits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outcome {
    pub exit_code: u8,
    pub output: String,
}

/// Load inputs, validate, and render the report.
///
/// Returns `Err` for anything that prevents a verdict (unreadable files,
/// bad genesis, malformed block, compute failure).
pub fn run(args: &Args) -> Result<Outcome> {
    let genesis = GenesisConstants::load(args.genesis.as_deref())
        .context("Failed to load genesis constants")?;

    let raw = std::fs::read(&args.block)
        .with_context(|| format!("Failed to read block file {}", args.block.display()))?;
    let block = decode_block(&raw).context("Failed to decode block")?;

    let engine = match args.backend {
        BackendArg::Auto => bc_compute::auto_detect(),
        BackendArg::Cpu => bc_compute::create_backend(Backend::Cpu)?,
        BackendArg::Sequential => bc_compute::create_backend(Backend::Sequential)?,
    };

    let pipeline = ValidationPipeline::new(genesis, engine);
    let report = if args.diagnose {
        pipeline.diagnose(&block)
    } else {
        pipeline.validate(&block)
    }
    .context("Block could not be validated")?;

    let exit_code = if report.is_valid() {
        log_block_event!(info, "bc-validate", "Block valid", block.height, block.short_hash());
        EXIT_VALID
    } else {
        log_block_event!(
            info,
            "bc-validate",
            "Block invalid",
            block.height,
            block.short_hash(),
            first_failure = ?report.first_failure()
        );
        EXIT_INVALID
    };

    let output = if args.json {
        let mut json = serde_json::to_string_pretty(&report)?;
        json.push('\n');
        json
    } else {
        render_table(&report)
    };

    Ok(Outcome { exit_code, output })
}

/// Human-readable per-stage table. Skipped stages show as `-`.
pub fn render_table(report: &ValidationReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "block  {} (height {})", report.block_hash, report.block_height);
    for stage in Stage::ALL {
        let status = match report.outcome(stage) {
            Some(true) => "pass",
            Some(false) => "FAIL",
            None => "-",
        };
        let _ = writeln!(out, "  {:<20} {}", stage.name(), status);
    }
    let verdict = if report.is_valid() { "VALID" } else { "INVALID" };
    let _ = writeln!(out, "result {}", verdict);
    out
}
