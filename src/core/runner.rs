//! Action dispatch and pipeline state machine
//!
//! Takes a parsed action request and a build matrix, validates the target
//! selection, and drives the configure/build/install pipeline through a
//! [`ShellExecutor`]. Steps within a target run strictly in pipeline order;
//! targets run sequentially in matrix declaration order, so logs interleave
//! predictably and a failure on one target never races the next.
//!
//! States: `Idle → Resolving → Configuring → Building → Installing → Done`,
//! with `Failed` terminal from any non-idle state. Nothing persists across
//! invocations; every run starts at `Idle`.

use std::fmt;
use std::path::PathBuf;

use crate::config::defaults::RESOLUTION_EXIT_CODE;
use crate::core::matrix::{BuildMatrix, Stage};
use crate::core::target::TargetId;
use crate::error::RunError;
use crate::infra::process::{ExecError, ShellExecutor};

/// CLI action verb
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Print usage, run nothing
    Help,
    /// Run only the configure stage
    Configure,
    /// Run only the build stage
    Build,
    /// Run only the install stage
    Install,
    /// Chain configure, build, and install per target
    All,
}

impl Action {
    /// Stages this verb executes, in pipeline order.
    ///
    /// Single-stage verbs are independently re-runnable; `build` does not
    /// require a prior `configure` in the same invocation.
    pub fn stages(&self) -> &'static [Stage] {
        match self {
            Action::Help => &[],
            Action::Configure => &[Stage::Configure],
            Action::Build => &[Stage::Build],
            Action::Install => &[Stage::Install],
            Action::All => &Stage::ALL,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Action::Help => write!(f, "help"),
            Action::Configure => write!(f, "configure"),
            Action::Build => write!(f, "build"),
            Action::Install => write!(f, "install"),
            Action::All => write!(f, "all"),
        }
    }
}

/// What happens to the rest of the matrix after one target fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FailurePolicy {
    /// Stop the whole run at the first failed step
    #[default]
    FailFast,
    /// Skip the failed target's remaining steps, continue with the next target
    KeepGoing,
}

/// A parsed, immutable run request
#[derive(Debug, Clone)]
pub struct ActionRequest {
    /// Action verb
    pub action: Action,
    /// Working directory for every spawned step
    pub working_dir: PathBuf,
    /// Requested target subset (None selects every matrix entry)
    pub targets: Option<Vec<TargetId>>,
    /// Failure policy
    pub policy: FailurePolicy,
}

/// Runner pipeline state, tracked for logging and error reporting
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Resolving,
    Configuring,
    Building,
    Installing,
    Done,
    Failed,
}

impl From<Stage> for RunnerState {
    fn from(stage: Stage) -> Self {
        match stage {
            Stage::Configure => RunnerState::Configuring,
            Stage::Build => RunnerState::Building,
            Stage::Install => RunnerState::Installing,
        }
    }
}

impl fmt::Display for RunnerState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunnerState::Idle => "idle",
            RunnerState::Resolving => "resolving",
            RunnerState::Configuring => "configuring",
            RunnerState::Building => "building",
            RunnerState::Installing => "installing",
            RunnerState::Done => "done",
            RunnerState::Failed => "failed",
        };
        write!(f, "{name}")
    }
}

/// Summary of a completed run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Steps that were executed (including failed ones)
    pub steps_run: usize,
    /// Targets whose selected stages all succeeded
    pub targets_succeeded: usize,
}

impl RunError {
    /// Process exit code for this failure.
    ///
    /// Step failures propagate the child's own exit code; everything else
    /// uses fixed sentinels.
    pub fn exit_code(&self) -> i32 {
        match self {
            RunError::StepFailed { code, .. } => *code,
            RunError::Interrupted { .. } => 130,
            RunError::UnknownTarget { .. } | RunError::Spawn { .. } => RESOLUTION_EXIT_CODE,
        }
    }
}

/// Execute an action request against a build matrix.
///
/// Returns the run report on full success, or the error that ended the run.
/// Under [`FailurePolicy::KeepGoing`] all selected targets are attempted and
/// the last step failure is returned, so the process exit code matches the
/// last failing child.
///
/// `progress` is invoked once per step, right before it spawns; the caller
/// decides how (and whether) to display it.
pub async fn run<S: ShellExecutor, P: Fn(TargetId, Stage)>(
    request: &ActionRequest,
    matrix: &BuildMatrix,
    executor: &S,
    progress: P,
) -> Result<RunReport, RunError> {
    let mut state = RunnerState::Idle;
    tracing::debug!(%state, action = %request.action, "runner start");

    if request.action == Action::Help {
        state = RunnerState::Done;
        tracing::debug!(%state, "help requested, nothing to run");
        return Ok(RunReport {
            steps_run: 0,
            targets_succeeded: 0,
        });
    }

    state = RunnerState::Resolving;
    tracing::debug!(%state, action = %request.action, "validating target selection");
    let selected = select_targets(request, matrix)?;

    let stages = request.action.stages();
    let mut steps_run = 0;
    let mut targets_succeeded = 0;
    let mut last_failure: Option<RunError> = None;

    for &target in &selected {
        // Selection is validated up front, so the lookup cannot miss
        let steps = match matrix.steps_for(target) {
            Some(steps) => steps,
            None => unreachable!("target validated against matrix"),
        };

        let mut target_failed = false;
        for &stage in stages {
            state = stage.into();
            let command = steps.step(stage);
            tracing::info!(%state, %target, command, "running step");
            progress(target, stage);

            steps_run += 1;
            match execute_step(executor, request, target, stage, command).await {
                Ok(()) => {}
                Err(err @ RunError::Interrupted { .. }) => {
                    // Interrupts always end the whole run
                    state = RunnerState::Failed;
                    tracing::error!(%state, "{err}");
                    return Err(err);
                }
                Err(err) => {
                    tracing::error!(%target, %stage, "{err}");
                    target_failed = true;
                    match request.policy {
                        FailurePolicy::FailFast => {
                            state = RunnerState::Failed;
                            tracing::debug!(%state, "fail-fast, aborting run");
                            return Err(err);
                        }
                        FailurePolicy::KeepGoing => {
                            // Skip the rest of this target's chain only
                            last_failure = Some(err);
                            break;
                        }
                    }
                }
            }
        }
        if !target_failed {
            targets_succeeded += 1;
        }
    }

    match last_failure {
        Some(err) => {
            state = RunnerState::Failed;
            tracing::debug!(%state, "run finished with failures");
            Err(err)
        }
        None => {
            state = RunnerState::Done;
            tracing::debug!(%state, steps_run, "run finished");
            Ok(RunReport {
                steps_run,
                targets_succeeded,
            })
        }
    }
}

/// Validate the requested target subset against the matrix.
///
/// The default selection is every matrix entry in declaration order. An
/// unknown target fails the run before any step is issued.
fn select_targets(
    request: &ActionRequest,
    matrix: &BuildMatrix,
) -> Result<Vec<TargetId>, RunError> {
    match &request.targets {
        None => Ok(matrix.targets()),
        Some(requested) => {
            for &target in requested {
                if matrix.steps_for(target).is_none() {
                    return Err(RunError::UnknownTarget {
                        name: target.to_string(),
                        available: matrix
                            .targets()
                            .iter()
                            .map(ToString::to_string)
                            .collect::<Vec<_>>()
                            .join(", "),
                    });
                }
            }
            Ok(requested.clone())
        }
    }
}

/// Run one step and interpret the outcome
async fn execute_step<S: ShellExecutor>(
    executor: &S,
    request: &ActionRequest,
    target: TargetId,
    stage: Stage,
    command: &str,
) -> Result<(), RunError> {
    let output = executor
        .run(command, &request.working_dir)
        .await
        .map_err(|e| match e {
            ExecError::Interrupted => RunError::Interrupted {
                target: target.to_string(),
                stage: stage.to_string(),
            },
            ExecError::Spawn(error) => RunError::Spawn {
                target: target.to_string(),
                stage: stage.to_string(),
                error,
            },
        })?;

    if output.success() {
        Ok(())
    } else {
        Err(RunError::StepFailed {
            target: target.to_string(),
            stage: stage.to_string(),
            command: command.to_string(),
            code: output.exit_code,
        })
    }
}
