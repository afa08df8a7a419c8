//! sls-secrets CLI - secrets around serverless lifecycle phases
//!
//! The host build/deploy tool invokes `sls-secrets hook <event>` at each bound
//! lifecycle event.

mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_tracing(cli.verbose, cli.quiet);

    let global = cli.global_options();
    match cli.command {
        Commands::Hook(args) => commands::hook::run(args, &global).await,
        Commands::Hooks(args) => commands::hooks::run(args),
        Commands::Validate(args) => commands::validate::run(args, &global).await,
        Commands::Clean => commands::clean::run(&global),
        Commands::Get(args) => commands::get::run(args, &global),
    }
}

/// Initialize tracing with appropriate verbosity
fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if quiet {
        EnvFilter::new("error")
    } else {
        match verbose {
            // Info shows per-secret progress lines
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false))
        .with(filter)
        .init();
}
