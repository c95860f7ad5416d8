//! Gate engine - runs the check sequence and decides the outcome.

use anyhow::{Context, Result};
use preflight_core::{Check, CheckDetails, CheckKind, CheckResult, Time};
use preflight_tools::{CaptureMode, ToolExecutor, ToolInput};
use std::sync::Arc;
use std::time::Instant;

use crate::gate::meets_threshold;
use crate::parser::parse_score;

/// Runs checks in order and stops at the first failure.
pub struct GateEngine {
    executor: Arc<dyn ToolExecutor>,
}

/// Result of running a gate.
#[derive(Debug, Clone)]
pub struct GateOutcome {
    /// Final decision.
    pub verdict: Verdict,

    /// Process exit code implied by the verdict: 0 on pass, the failing
    /// tool's own exit code otherwise, a synthesized 1 for a threshold miss.
    pub exit_code: i32,

    /// Results for every check that ran (the failing check last).
    pub results: Vec<CheckResult>,

    /// When the run started.
    pub started_at: Time,
}

/// Gate decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// All checks passed.
    Pass,
    /// A check failed; later checks never ran.
    Fail,
}

impl GateEngine {
    /// Create an engine over the given executor.
    pub fn new(executor: Arc<dyn ToolExecutor>) -> Self {
        Self { executor }
    }

    /// Run a single check.
    pub async fn run_check(&self, check: &Check) -> Result<CheckResult> {
        tracing::debug!("running check: {}", check.name);
        let start = Instant::now();

        let (tool, args, capture) = command_for(&check.kind);
        let input = ToolInput {
            args,
            env: Default::default(),
            capture,
        };

        let output = self
            .executor
            .execute_tool(&tool, input)
            .await
            .with_context(|| format!("check {} could not run {}", check.name, tool))?;

        let (passed, score) = match &check.kind {
            CheckKind::Formatted { .. } | CheckKind::TestsPass { .. } => {
                (output.exit_code == 0, None)
            }
            CheckKind::LintScore { .. } => {
                // The linter's exit code encodes its message categories, not
                // a verdict; only the extracted score decides.
                let score = parse_score(&output.stdout).with_context(|| {
                    format!("check {} produced an unusable report", check.name)
                })?;
                (meets_threshold(score.as_str()), Some(score))
            }
        };

        Ok(CheckResult {
            name: check.name.clone(),
            passed,
            execution_time: start.elapsed(),
            details: CheckDetails {
                output: output.stdout,
                exit_code: Some(output.exit_code),
            },
            score,
        })
    }

    /// Run checks strictly in order; the first failure ends the run and
    /// later checks are never invoked.
    pub async fn run_gate(&self, checks: &[Check]) -> Result<GateOutcome> {
        let started_at = chrono::Utc::now();
        let mut results = Vec::new();

        for check in checks {
            let result = self.run_check(check).await?;
            let passed = result.passed;
            let code = failure_exit_code(&check.kind, &result);
            results.push(result);

            if !passed {
                tracing::debug!("check {} failed, stopping", check.name);
                return Ok(GateOutcome {
                    verdict: Verdict::Fail,
                    exit_code: code,
                    results,
                    started_at,
                });
            }
        }

        Ok(GateOutcome {
            verdict: Verdict::Pass,
            exit_code: 0,
            results,
            started_at,
        })
    }
}

fn command_for(kind: &CheckKind) -> (String, Vec<String>, CaptureMode) {
    match kind {
        CheckKind::Formatted { formatter, target } => (
            formatter.clone(),
            vec!["--check".to_string(), target.clone()],
            CaptureMode::Passthrough,
        ),
        CheckKind::TestsPass { runner } => {
            (runner.clone(), Vec::new(), CaptureMode::Passthrough)
        }
        CheckKind::LintScore { linter, target } => {
            (linter.clone(), vec![target.clone()], CaptureMode::Tee)
        }
    }
}

/// Exit code the whole run reports if this result failed.
fn failure_exit_code(kind: &CheckKind, result: &CheckResult) -> i32 {
    match kind {
        // The failing tool's own exit code propagates unchanged.
        CheckKind::Formatted { .. } | CheckKind::TestsPass { .. } => {
            result.details.exit_code.unwrap_or(1)
        }
        // A threshold miss synthesizes a plain failure.
        CheckKind::LintScore { .. } => 1,
    }
}
