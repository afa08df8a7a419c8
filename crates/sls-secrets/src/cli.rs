//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use sls_secrets_core::{ExecutionMode, CI_ENV_VAR, DEFAULT_SECRETS_FILE};
use std::path::PathBuf;

pub use crate::commands::get::GetArgs;
pub use crate::commands::hook::HookArgs;
pub use crate::commands::hooks::HooksArgs;
pub use crate::commands::validate::ValidateArgs;

/// sls-secrets - load cloud secrets for serverless package/deploy phases
#[derive(Parser, Debug)]
#[command(name = "sls-secrets")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to serverless.yml (default: search current and parent directories)
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Transient secrets file
    #[arg(long, global = true, env = "SLS_SECRETS_FILE", default_value = DEFAULT_SECRETS_FILE)]
    pub secrets_file: PathBuf,

    /// Run in CI mode (use ambient credentials, never a named profile)
    #[arg(long, global = true)]
    pub ci: bool,

    /// CI flag read from the environment
    #[arg(long, global = true, env = CI_ENV_VAR, hide = true)]
    pub ci_env: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the handler bound to a host lifecycle event
    Hook(HookArgs),

    /// List the lifecycle events sls-secrets binds to
    Hooks(HooksArgs),

    /// Fetch and merge secrets without writing the secrets file
    Validate(ValidateArgs),

    /// Delete the secrets file if present
    Clean,

    /// Print one value from the secrets file
    Get(GetArgs),
}

/// Options shared by every command
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    pub config: Option<Utf8PathBuf>,
    pub secrets_file: PathBuf,
    pub mode: ExecutionMode,
}

impl Cli {
    pub fn global_options(&self) -> GlobalOptions {
        let mode = if self.ci {
            ExecutionMode::Ci
        } else {
            ExecutionMode::from_flag(self.ci_env.as_deref())
        };

        GlobalOptions {
            config: self.config.clone(),
            secrets_file: self.secrets_file.clone(),
            mode,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_hook() {
        let cli = Cli::try_parse_from([
            "sls-secrets",
            "hook",
            "before:package:initialize",
            "--ci",
            "--secrets-file",
            "/tmp/s.json",
        ])
        .unwrap();

        let global = cli.global_options();
        assert_eq!(global.mode, ExecutionMode::Ci);
        assert_eq!(global.secrets_file, PathBuf::from("/tmp/s.json"));
        match cli.command {
            Commands::Hook(args) => assert_eq!(args.event, "before:package:initialize"),
            other => panic!("Expected hook command, got {:?}", other),
        }
    }

    #[test]
    fn test_ci_env_value() {
        let cli = Cli::try_parse_from(["sls-secrets", "clean", "--ci-env", "yes"]).unwrap();
        assert_eq!(cli.global_options().mode, ExecutionMode::Ci);

        let cli = Cli::try_parse_from(["sls-secrets", "clean", "--ci-env", "no"]).unwrap();
        assert_eq!(cli.global_options().mode, ExecutionMode::Interactive);
    }
}
