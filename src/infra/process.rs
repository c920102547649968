//! External process execution
//!
//! The [`ShellExecutor`] trait is the only side-effecting primitive the
//! action runner depends on; tests substitute a recording stub. The
//! production implementation spawns through the platform shell, streams
//! child output while capturing it, and kills the child on Ctrl-C.

use std::path::Path;
use std::process::Stdio;

use thiserror::Error;
use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::process::Command;

/// Result of one executed build step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutput {
    /// Process exit code (non-zero means the step failed)
    pub exit_code: i32,
    /// Captured standard output
    pub stdout: String,
    /// Captured standard error
    pub stderr: String,
}

impl StepOutput {
    /// Whether the step exited successfully
    pub fn success(&self) -> bool {
        self.exit_code == 0
    }
}

/// Executor-level errors.
///
/// A non-zero exit status is not an error at this level; it is reported
/// through [`StepOutput::exit_code`] and interpreted by the runner.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExecError {
    /// The command could not be spawned
    #[error("failed to spawn command: {0}")]
    Spawn(String),

    /// The child was killed by an interrupt signal
    #[error("interrupted")]
    Interrupted,
}

/// Runs a command string in a working directory.
///
/// Implementations must not interpret the command beyond handing it to a
/// shell; command syntax is the build tool's concern.
#[allow(async_fn_in_trait)]
pub trait ShellExecutor {
    /// Run `command` with `cwd` as the working directory, waiting for exit
    async fn run(&self, command: &str, cwd: &Path) -> Result<StepOutput, ExecError>;
}

/// Production executor spawning through the platform shell
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemShell;

impl SystemShell {
    /// Create a new system shell executor
    pub fn new() -> Self {
        Self
    }
}

/// Read a child stream line by line, echoing while collecting
async fn tee<R: AsyncRead + Unpin>(reader: R, to_stderr: bool) -> String {
    let mut lines = BufReader::new(reader).lines();
    let mut collected = String::new();
    while let Ok(Some(line)) = lines.next_line().await {
        if to_stderr {
            eprintln!("{line}");
        } else {
            println!("{line}");
        }
        collected.push_str(&line);
        collected.push('\n');
    }
    collected
}

impl ShellExecutor for SystemShell {
    async fn run(&self, command: &str, cwd: &Path) -> Result<StepOutput, ExecError> {
        let mut cmd = if cfg!(windows) {
            let mut cmd = Command::new("cmd");
            cmd.arg("/C").arg(command);
            cmd
        } else {
            let mut cmd = Command::new("sh");
            cmd.arg("-c").arg(command);
            cmd
        };
        cmd.current_dir(cwd)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true);

        let mut child = cmd.spawn().map_err(|e| ExecError::Spawn(e.to_string()))?;

        let stdout_task = child
            .stdout
            .take()
            .map(|out| tokio::spawn(tee(out, false)));
        let stderr_task = child
            .stderr
            .take()
            .map(|err| tokio::spawn(tee(err, true)));

        let status = tokio::select! {
            status = child.wait() => {
                status.map_err(|e| ExecError::Spawn(e.to_string()))?
            }
            _ = tokio::signal::ctrl_c() => {
                tracing::warn!("interrupt received, killing child process");
                let _ = child.kill().await;
                return Err(ExecError::Interrupted);
            }
        };

        let stdout = match stdout_task {
            Some(task) => task.await.unwrap_or_default(),
            None => String::new(),
        };
        let stderr = match stderr_task {
            Some(task) => task.await.unwrap_or_default(),
            None => String::new(),
        };

        Ok(StepOutput {
            // Signal-terminated children have no code; treat as failure
            exit_code: status.code().unwrap_or(1),
            stdout,
            stderr,
        })
    }
}
