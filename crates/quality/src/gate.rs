//! The threshold gate and the fixed check plan.

use preflight_core::{Check, CheckKind};

/// Module every check targets.
pub const TARGET_MODULE: &str = "grepme";

/// Minimum acceptable lint score, kept as text.
pub const SCORE_THRESHOLD: &str = "9";

/// Whether a score satisfies the threshold.
///
/// The comparison is lexicographic over the raw score text, phrased as "the
/// threshold is greater than the score" and inverted. For the ratings the
/// linter emits in practice (0.00 through 9.99) byte order agrees with
/// numeric order; a perfect "10.00" sorts below "9" and fails the gate.
/// Known limitation, preserved rather than repaired.
pub fn meets_threshold(score: &str) -> bool {
    !(SCORE_THRESHOLD > score)
}

/// The fixed three-step plan for the grepme project: format check, test
/// suite, lint score.
pub fn standard_checks() -> Vec<Check> {
    vec![
        Check::new(
            "format",
            CheckKind::Formatted {
                formatter: "black".to_string(),
                target: TARGET_MODULE.to_string(),
            },
        ),
        Check::new(
            "tests",
            CheckKind::TestsPass {
                runner: "pytest".to_string(),
            },
        ),
        Check::new(
            "lint",
            CheckKind::LintScore {
                linter: "pylint".to_string(),
                target: TARGET_MODULE.to_string(),
            },
        ),
    ]
}
