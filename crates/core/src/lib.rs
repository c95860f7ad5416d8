//! Preflight core data models.
//!
//! This crate defines the check plan and result types shared by the
//! tool-execution and gate layers.

#![warn(missing_docs)]

mod check;

pub use check::{Check, CheckDetails, CheckKind, CheckResult, LintScore};

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
