//! preflight - quality gate runner for the grepme project.

use anyhow::Result;
use clap::Parser;
use preflight_quality::{standard_checks, GateEngine};
use preflight_tools::SystemExecutor;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::Level;

/// Runs the grepme quality gates in order: format check, test suite, lint
/// score. Exits 0 when every gate passes. A failing formatter or test runner
/// ends the run immediately with that tool's own exit code; a lint score
/// below the threshold exits 1. All diagnostics come from the tools
/// themselves.
#[derive(Parser)]
#[command(name = "preflight", version, about = "Quality gates for the grepme project")]
struct Cli {}

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_max_level(Level::WARN)
        .init();

    let _cli = Cli::parse();

    match run().await {
        Ok(code) => ExitCode::from(code),
        Err(err) => {
            // Spawn failures and unusable lint reports are the only paths
            // that synthesize a message; gate failures stay silent.
            eprintln!("preflight: {err:#}");
            ExitCode::FAILURE
        }
    }
}

async fn run() -> Result<u8> {
    let engine = GateEngine::new(Arc::new(SystemExecutor));
    let outcome = engine.run_gate(&standard_checks()).await?;
    Ok(exit_code(outcome.exit_code))
}

/// Clamp a tool's exit code into the 0-255 range the process can report.
fn exit_code(code: i32) -> u8 {
    u8::try_from(code).unwrap_or(u8::MAX)
}
