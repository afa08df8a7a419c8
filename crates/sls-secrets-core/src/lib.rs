//! # sls-secrets-core
//!
//! Core library for sls-secrets providing:
//! - Host configuration parsing (serverless.yml)
//! - Execution mode detection (interactive vs CI)
//! - Shared constants for the transient secrets file and credential profiles

pub mod config;
pub mod error;
pub mod types;

pub use config::PluginConfig;
pub use error::{Error, Result};
pub use types::{ExecutionMode, SecretsSettings};

/// Default location of the transient secrets file
pub const DEFAULT_SECRETS_FILE: &str = "./.secrets.json";

/// Credential profile used by offline hooks
pub const OFFLINE_PROFILE: &str = "tracker";

/// Environment variable that marks a CI run
pub const CI_ENV_VAR: &str = "CI_ENV";

/// Value of [`CI_ENV_VAR`] that enables CI execution mode
pub const CI_ENV_ENABLED: &str = "yes";
