//! Crossforge CLI - cross-target native library build orchestrator
//!
//! Entry point for the crossforge command-line application.

use clap::Parser;

use crossforge::cli::Cli;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber; -v raises the default level
    let default_level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(default_level.into()),
        )
        .init();

    let exit_code = cli.run().await;
    std::process::exit(exit_code);
}
