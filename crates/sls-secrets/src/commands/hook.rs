//! Run the handler bound to a host lifecycle event

use anyhow::{Context, Result};
use clap::Args;
use sls_secrets_lifecycle::{cleanup, HookAction, HookContext, HookRegistry};
use sls_secrets_store::AwsConnector;

use super::{load_settings, secrets_file};
use crate::cli::GlobalOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct HookArgs {
    /// Lifecycle event name (e.g. before:package:initialize)
    pub event: String,
}

pub async fn run(args: HookArgs, global: &GlobalOptions) -> Result<()> {
    let registry = HookRegistry::new();
    let file = secrets_file(global);

    let action = registry
        .action_for(&args.event)
        .with_context(|| format!("Unknown lifecycle event: {}", args.event))?;

    // Cleanup must work even when the host configuration is broken
    let outcome = if action == HookAction::Cleanup {
        cleanup(&file)?
    } else {
        let settings = load_settings(global)?;
        let connector = AwsConnector;
        let ctx = HookContext::new(&settings, global.mode, &connector, &file);
        registry
            .dispatch(&args.event, &ctx)
            .await
            .with_context(|| format!("Lifecycle hook {} failed", args.event))?
    };

    output::outcome(&outcome);
    Ok(())
}
