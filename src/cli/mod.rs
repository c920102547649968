//! Command-line interface module
//!
//! This module handles argument parsing and output formatting.
//! It contains no business logic - that belongs in the [`crate::core`] module.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};

use crate::core::runner::Action;
use commands::RunArgs;
use output::OutputConfig;

/// Version string including build metadata from the build script
const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (",
    env!("VERGEN_GIT_SHA"),
    ", ",
    env!("VERGEN_BUILD_TIMESTAMP"),
    ")"
);

/// Crossforge - cross-target native library build orchestrator
///
/// Drive a configure/build/install pipeline for one package across its
/// (OS, architecture) build matrix.
#[derive(Parser, Debug)]
#[command(name = "crossforge")]
#[command(author, version, long_version = LONG_VERSION, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output in JSON format for scripting
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the configure stage for the selected targets
    Configure {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Run the build stage for the selected targets
    Build {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Run the install stage for the selected targets
    Install {
        #[command(flatten)]
        args: RunArgs,
    },

    /// Run configure, build, and install per target
    All {
        #[command(flatten)]
        args: RunArgs,
    },
}

impl Cli {
    /// Execute the CLI command, returning the process exit code
    pub async fn run(self) -> i32 {
        let output = OutputConfig::new(self.quiet, self.json);

        let (action, args) = match self.command {
            Some(Commands::Configure { args }) => (Action::Configure, args),
            Some(Commands::Build { args }) => (Action::Build, args),
            Some(Commands::Install { args }) => (Action::Install, args),
            Some(Commands::All { args }) => (Action::All, args),
            None => {
                // No subcommand provided, show help
                use clap::CommandFactory;
                let mut cmd = Self::command();
                let _ = cmd.print_help();
                return 0;
            }
        };

        commands::execute(action, args, output).await
    }
}
