//! List the lifecycle events sls-secrets binds to

use anyhow::{Context, Result};
use clap::Args;
use sls_secrets_lifecycle::{HookBinding, HookRegistry};

use crate::output;

#[derive(Args, Debug)]
pub struct HooksArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: HooksArgs) -> Result<()> {
    let registry = HookRegistry::new();
    let bindings: Vec<HookBinding> = registry.bindings().collect();

    if args.json {
        let json =
            serde_json::to_string_pretty(&bindings).context("Failed to serialize hook bindings")?;
        println!("{}", json);
        return Ok(());
    }

    output::header(&format!("{} lifecycle hooks", bindings.len()));
    for binding in &bindings {
        output::kv(binding.event, &binding.action.to_string());
    }
    Ok(())
}
