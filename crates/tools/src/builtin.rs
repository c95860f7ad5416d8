//! Built-in executor backed by the system `PATH`.

use super::r#trait::*;
use anyhow::Context;
use async_trait::async_trait;
use std::process::Stdio;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::process::Command;

/// Executor that spawns the named program as a child process.
pub struct SystemExecutor;

#[async_trait]
impl ToolExecutor for SystemExecutor {
    async fn execute_tool(
        &self,
        tool: &str,
        input: ToolInput,
    ) -> Result<ToolOutput, anyhow::Error> {
        let start = std::time::Instant::now();

        let mut cmd = Command::new(tool);
        cmd.args(&input.args);
        for (k, v) in &input.env {
            cmd.env(k, v);
        }

        tracing::debug!("spawning {} {:?}", tool, input.args);

        match input.capture {
            CaptureMode::Passthrough => {
                let status = cmd
                    .status()
                    .await
                    .with_context(|| format!("failed to run {tool}"))?;

                Ok(ToolOutput {
                    exit_code: status.code().unwrap_or(-1),
                    stdout: String::new(),
                    duration: start.elapsed(),
                })
            }
            CaptureMode::Tee => {
                cmd.stdout(Stdio::piped());

                let mut child = cmd
                    .spawn()
                    .with_context(|| format!("failed to run {tool}"))?;

                // Each chunk reaches the terminal before the next read, so the
                // mirror and the capture hold identical bytes.
                let mut piped = child.stdout.take().context("child stdout not piped")?;
                let mut terminal = tokio::io::stdout();
                let mut captured = Vec::new();
                let mut chunk = [0u8; 8192];
                loop {
                    let n = piped.read(&mut chunk).await?;
                    if n == 0 {
                        break;
                    }
                    terminal.write_all(&chunk[..n]).await?;
                    captured.extend_from_slice(&chunk[..n]);
                }
                terminal.flush().await?;

                let status = child.wait().await?;

                Ok(ToolOutput {
                    exit_code: status.code().unwrap_or(-1),
                    stdout: String::from_utf8_lossy(&captured).to_string(),
                    duration: start.elapsed(),
                })
            }
        }
    }
}
