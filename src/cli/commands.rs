//! CLI command implementation
//!
//! All four action verbs share one pipeline: load the manifest, read the
//! environment configuration, resolve toolchains, generate the matrix, and
//! hand the request to the runner. The verbs differ only in which stages
//! the runner executes.

use std::path::PathBuf;

use clap::Args;

use crate::cli::output::OutputConfig;
use crate::config::defaults::RESOLUTION_EXIT_CODE;
use crate::config::EnvConfig;
use crate::core::manifest::Manifest;
use crate::core::matrix::BuildMatrix;
use crate::core::runner::{self, Action, ActionRequest, FailurePolicy, RunReport};
use crate::core::target::TargetId;
use crate::error::CrossforgeError;
use crate::infra::process::SystemShell;
use crate::infra::toolchain;

/// Arguments shared by every action verb
#[derive(Args, Debug, Clone, Default)]
pub struct RunArgs {
    /// Working directory containing crossforge.toml and the sources
    #[arg(short = 'C', long = "directory", value_name = "DIR")]
    pub directory: Option<PathBuf>,

    /// Restrict the run to specific targets (repeatable)
    #[arg(long = "target", value_name = "TARGET", value_parser = parse_target)]
    pub targets: Vec<TargetId>,

    /// Continue with remaining targets after one target fails
    #[arg(long)]
    pub keep_going: bool,

    /// Number of parallel jobs passed to the build tool
    #[arg(short, long)]
    pub jobs: Option<usize>,
}

fn parse_target(s: &str) -> Result<TargetId, String> {
    s.parse()
}

/// Execute an action verb, returning the process exit code
pub async fn execute(action: Action, args: RunArgs, output: OutputConfig) -> i32 {
    match run_pipeline(action, &args, output).await {
        Ok(report) => {
            output.summary(&action.to_string(), &report);
            0
        }
        Err(err) => {
            let code = exit_code_for(&err);
            output.error(&anyhow::Error::from(err));
            code
        }
    }
}

/// Map an error to the process exit code.
///
/// Step failures propagate the child's exit code; resolution and
/// configuration failures use the fixed sentinel.
fn exit_code_for(err: &CrossforgeError) -> i32 {
    match err {
        CrossforgeError::Run(run_err) => run_err.exit_code(),
        _ => RESOLUTION_EXIT_CODE,
    }
}

async fn run_pipeline(
    action: Action,
    args: &RunArgs,
    output: OutputConfig,
) -> Result<RunReport, CrossforgeError> {
    let working_dir = match &args.directory {
        Some(dir) => dir.clone(),
        None => std::env::current_dir()?,
    };

    let manifest = Manifest::load(&working_dir)?;
    tracing::info!(
        package = %manifest.package.name,
        version = %manifest.package.version,
        "loaded manifest"
    );

    // Environment and toolchains are validated before anything spawns
    let env = EnvConfig::from_env()?;
    let enabled = manifest.enabled_targets();

    let spinner = (!output.quiet && !output.json)
        .then(|| crate::cli::output::create_spinner("Resolving toolchains"));
    let resolved = toolchain::resolve_all(&env, &enabled);
    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }
    let toolchains = resolved?;

    let jobs = args
        .jobs
        .or(manifest.build.jobs)
        .unwrap_or_else(num_cpus::get);
    let matrix = BuildMatrix::generate(&manifest.package, &toolchains, &env, jobs);

    let policy = if args.keep_going || manifest.build.keep_going {
        FailurePolicy::KeepGoing
    } else {
        FailurePolicy::FailFast
    };

    let request = ActionRequest {
        action,
        working_dir,
        targets: (!args.targets.is_empty()).then(|| args.targets.clone()),
        policy,
    };

    let report = runner::run(&request, &matrix, &SystemShell::new(), |target, stage| {
        output.step(target, stage);
    })
    .await?;
    Ok(report)
}
