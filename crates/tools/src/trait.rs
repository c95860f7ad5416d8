//! Tool abstraction.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Tool executor - runs external programs by name.
#[async_trait]
pub trait ToolExecutor: Send + Sync {
    /// Execute a program found on `PATH` and wait for it to exit.
    ///
    /// A spawn failure (program missing, not executable) is an `Err`; a
    /// nonzero exit is a normal `ToolOutput`.
    async fn execute_tool(
        &self,
        tool: &str,
        input: ToolInput,
    ) -> Result<ToolOutput, anyhow::Error>;
}

/// Input to a tool invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolInput {
    /// Command arguments
    pub args: Vec<String>,

    /// Environment variables
    pub env: HashMap<String, String>,

    /// How the child's stdout is routed
    pub capture: CaptureMode,
}

/// How a tool's stdout is routed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CaptureMode {
    /// Child inherits the parent's stdio; nothing is captured.
    Passthrough,

    /// Child stdout is streamed to the parent's stdout chunk by chunk while
    /// an identical copy accumulates in memory. Stderr stays inherited.
    Tee,
}

/// Output from a tool.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolOutput {
    /// Exit code; -1 when the tool died without one (e.g. killed by signal)
    pub exit_code: i32,

    /// Captured stdout; empty under [`CaptureMode::Passthrough`]
    pub stdout: String,

    /// Execution duration
    pub duration: std::time::Duration,
}
