//! Lint report scraping.
//!
//! The linter's report is consumed by fixed position: second-to-last line,
//! 7th space-delimited field, text before the first `/`. The format belongs
//! to the linter, so every deviation from it is a hard error here rather
//! than a silently wrong score downstream.

use preflight_core::LintScore;
use regex::Regex;
use std::sync::OnceLock;

/// Shape of an extracted score: optional sign, digits, optional fraction.
/// Linters emit negative ratings for sufficiently bad code.
const SCORE_PATTERN: &str = r"^-?[0-9]+(\.[0-9]+)?$";

static SCORE_RE: OnceLock<Regex> = OnceLock::new();

fn score_re() -> &'static Regex {
    SCORE_RE.get_or_init(|| Regex::new(SCORE_PATTERN).expect("score pattern compiles"))
}

/// Why a lint report could not be scored.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Report too short to contain a summary line.
    #[error("lint report has {0} line(s), expected at least 2")]
    TooShort(usize),

    /// Summary line has fewer space-delimited fields than the score position.
    #[error("summary line {0:?} has no 7th space-delimited field")]
    MissingField(String),

    /// The field where the rating belongs has no `/` separator.
    #[error("rating field {0:?} has no '/' separator")]
    MissingSeparator(String),

    /// The text before the `/` does not look like a score.
    #[error("extracted score {0:?} is not numeric")]
    NotNumeric(String),
}

/// Extract the lint score from a full report.
///
/// The score comes back as the exact text the linter printed; callers decide
/// what to do with it (see [`crate::gate::meets_threshold`]).
pub fn parse_score(report: &str) -> Result<LintScore, ReportError> {
    let lines: Vec<&str> = report.lines().collect();
    if lines.len() < 2 {
        return Err(ReportError::TooShort(lines.len()));
    }

    // The summary line sits above the report's trailing blank line:
    // "Your code has been rated at 9.50/10 (previous run: 9.00/10, +0.50)"
    let summary = lines[lines.len() - 2];

    let field = summary
        .split(' ')
        .nth(6)
        .ok_or_else(|| ReportError::MissingField(summary.to_string()))?;

    let (score, _max) = field
        .split_once('/')
        .ok_or_else(|| ReportError::MissingSeparator(field.to_string()))?;

    if !score_re().is_match(score) {
        return Err(ReportError::NotNumeric(score.to_string()));
    }

    Ok(LintScore::new(score))
}
