//! bc-validate: check a braided block against genesis constants
//!
//! Exit status: 0 valid, 1 invalid, 2 malformed input or bad configuration.

use std::process::ExitCode;

use clap::Parser;

use bc_validate::{run, Args, EXIT_ERROR};
use braid_telemetry::{init_tracing, TelemetryConfig};

fn main() -> ExitCode {
    let args = Args::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if let Some(level) = &args.log_level {
        telemetry = telemetry.with_log_level(level.clone());
    }
    if let Err(e) = init_tracing(&telemetry) {
        eprintln!("Warning: logging disabled: {e}");
    }

    match run(&args) {
        Ok(outcome) => {
            print!("{}", outcome.output);
            ExitCode::from(outcome.exit_code)
        }
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(EXIT_ERROR)
        }
    }
}
