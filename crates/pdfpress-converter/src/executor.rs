//! External engine invocation.
//!
//! Runs the conversion engine as a child process with captured output and
//! a hard wall-clock timeout.

use std::path::Path;
use std::process::Stdio;
use std::time::Duration;

use tokio::process::Command;

use crate::error::ConvertError;

/// Cap on captured stderr carried into error values.
const MAX_STDERR_LEN: usize = 2000;

/// Runs the external conversion engine.
#[derive(Debug, Clone)]
pub struct EngineExecutor {
    command: String,
    timeout_seconds: u64,
}

impl EngineExecutor {
    /// Create an executor for the given engine command.
    pub fn new(command: impl Into<String>, timeout_seconds: u64) -> Self {
        Self {
            command: command.into(),
            timeout_seconds,
        }
    }

    /// Convert `input_path` to PDF, writing the result into `out_dir`.
    ///
    /// Invokes `<engine> --headless --convert-to pdf --outdir <out_dir>
    /// <input_path>` and waits for it to exit. A non-zero exit code fails
    /// the job; when the timeout elapses the child is killed and the job
    /// fails with [`ConvertError::Timeout`].
    pub async fn convert_to_pdf(
        &self,
        out_dir: &Path,
        input_path: &Path,
    ) -> Result<(), ConvertError> {
        let start = std::time::Instant::now();

        tracing::info!(
            command = %self.command,
            input = %input_path.display(),
            outdir = %out_dir.display(),
            "Spawning conversion engine"
        );

        let mut cmd = Command::new(&self.command);
        cmd.arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(out_dir)
            .arg(input_path)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let timeout = Duration::from_secs(self.timeout_seconds);
        // Dropping the output future on timeout kills the child via
        // kill_on_drop.
        let output = match tokio::time::timeout(timeout, cmd.output()).await {
            Ok(result) => result?,
            Err(_) => {
                tracing::error!(
                    command = %self.command,
                    timeout_seconds = self.timeout_seconds,
                    "Conversion engine timed out, killing child"
                );
                return Err(ConvertError::Timeout(self.timeout_seconds));
            }
        };

        if !output.status.success() {
            let code = output.status.code().unwrap_or(-1);
            let stderr = String::from_utf8_lossy(&output.stderr);
            tracing::error!(
                command = %self.command,
                exit_code = code,
                stderr = %stderr.chars().take(500).collect::<String>(),
                "Conversion engine failed"
            );
            return Err(ConvertError::EngineFailed {
                code,
                stderr: stderr.chars().take(MAX_STDERR_LEN).collect(),
            });
        }

        tracing::info!(
            command = %self.command,
            duration_ms = start.elapsed().as_millis() as u64,
            "Conversion engine finished"
        );

        Ok(())
    }
}
