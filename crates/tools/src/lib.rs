//! Tool Integration
//!
//! Execute the external quality tools (formatter, test runner, linter) as
//! child processes and route their output.

#![warn(missing_docs)]

pub mod r#trait;
pub mod builtin;

pub use builtin::SystemExecutor;
pub use r#trait::{CaptureMode, ToolExecutor, ToolInput, ToolOutput};
