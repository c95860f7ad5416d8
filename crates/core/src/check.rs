//! Check model - the gate's steps and their results.

use serde::{Deserialize, Serialize};

/// A single gate step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Check {
    /// Short name used in logs ("format", "tests", "lint").
    pub name: String,

    /// What to run and how to judge it.
    pub kind: CheckKind,
}

impl Check {
    /// Create a named check.
    pub fn new(name: impl Into<String>, kind: CheckKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }
}

/// The kinds of checks the gate knows how to run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum CheckKind {
    /// Formatter in check-only mode; passes iff nothing would change.
    Formatted {
        /// Formatter program name.
        formatter: String,
        /// Module or package the formatter is pointed at.
        target: String,
    },

    /// Test runner with its default discovery; passes iff it exits zero.
    TestsPass {
        /// Test runner program name.
        runner: String,
    },

    /// Linter whose report is mirrored to the terminal, captured, and scored.
    /// The tool's exit code does not decide the outcome; the extracted score
    /// does.
    LintScore {
        /// Linter program name.
        linter: String,
        /// Module or package the linter is pointed at.
        target: String,
    },
}

/// A lint score kept as the exact text the linter printed.
///
/// Scores are never converted to a numeric type anywhere in the workspace;
/// the threshold gate compares them as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LintScore(String);

impl LintScore {
    /// Wrap raw score text.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The score exactly as the linter emitted it.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for LintScore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Result of running one check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckResult {
    /// Name of the check that produced this result.
    pub name: String,

    /// Whether the check passed.
    pub passed: bool,

    /// Wall-clock time spent in the check.
    pub execution_time: std::time::Duration,

    /// Raw evidence from the underlying tool.
    pub details: CheckDetails,

    /// Extracted lint score; present only for lint checks.
    pub score: Option<LintScore>,
}

/// Raw evidence from the underlying tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckDetails {
    /// Captured stdout; empty for passthrough checks.
    pub output: String,

    /// The tool's exit code, if it exited at all.
    pub exit_code: Option<i32>,
}
