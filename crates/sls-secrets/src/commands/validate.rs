//! Fetch and merge secrets without writing the secrets file

use anyhow::{Context, Result};
use clap::Args;
use sls_secrets_core::OFFLINE_PROFILE;
use sls_secrets_store::{AwsConnector, CredentialSource, SecretAggregator};

use super::load_settings;
use crate::cli::GlobalOptions;
use crate::output;

#[derive(Args, Debug)]
pub struct ValidateArgs {
    /// Credential profile (overrides provider.profile)
    #[arg(short, long, conflicts_with = "offline")]
    pub profile: Option<String>,

    /// Use the offline credential profile
    #[arg(long)]
    pub offline: bool,

    /// Show secret values (WARNING: insecure)
    #[arg(long)]
    pub show_values: bool,
}

pub async fn run(args: ValidateArgs, global: &GlobalOptions) -> Result<()> {
    let settings = load_settings(global)?;

    if settings.secret_refs.is_empty() {
        output::info("No secrets configured");
        return Ok(());
    }

    let profile = if args.offline {
        Some(OFFLINE_PROFILE)
    } else {
        args.profile.as_deref()
    };

    let connector = AwsConnector;
    let aggregator = SecretAggregator::new(&settings, global.mode, &connector);
    let options = aggregator.client_options(profile);

    output::header(&format!("Validating {} secrets", settings.secret_refs.len()));
    output::kv("Region", &options.region);
    let credentials = match &options.credentials {
        CredentialSource::Profile(Some(name)) => name.as_str(),
        CredentialSource::Profile(None) => "default profile",
        CredentialSource::Ambient => "default credential chain",
    };
    output::kv("Credentials", credentials);
    output::kv("Mode", &global.mode.to_string());

    let spinner = output::spinner("Loading secrets...");
    let result = aggregator.load_secrets(profile).await;
    spinner.finish_and_clear();

    let secrets = result.context("Secret loading failed")?;
    output::success(&format!(
        "Loaded {} keys from {} secrets",
        secrets.len(),
        settings.secret_refs.len()
    ));
    println!();

    for (key, value) in secrets.iter() {
        let value_display = if args.show_values {
            value.to_string()
        } else {
            format!("[REDACTED {} bytes]", value.len())
        };
        output::kv(key, &value_display);
    }

    Ok(())
}
