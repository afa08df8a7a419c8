//! CLI command implementations

pub mod clean;
pub mod get;
pub mod hook;
pub mod hooks;
pub mod validate;

use anyhow::{Context, Result};
use sls_secrets_core::{PluginConfig, SecretsSettings};
use sls_secrets_lifecycle::SecretsFile;

use crate::cli::GlobalOptions;

/// Load host configuration and extract the aggregator settings
pub(crate) fn load_settings(global: &GlobalOptions) -> Result<SecretsSettings> {
    let config = PluginConfig::load(global.config.as_deref())
        .context("Failed to load host configuration")?;
    tracing::debug!("Using configuration: {}", config.config_path);

    config
        .settings()
        .with_context(|| format!("Invalid configuration in {}", config.config_path))
}

pub(crate) fn secrets_file(global: &GlobalOptions) -> SecretsFile {
    SecretsFile::new(&global.secrets_file)
}
