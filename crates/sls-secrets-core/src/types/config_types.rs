//! Host configuration types (the parts of serverless.yml the plugin reads)

use serde::{Deserialize, Serialize};

/// Root of the host configuration file
///
/// Only the keys the plugin needs are modelled; everything else in the
/// host file is ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerlessConfigFile {
    /// Service name
    #[serde(default)]
    pub service: Option<String>,

    /// Provider settings
    #[serde(default)]
    pub provider: ProviderConfig,

    /// Custom block holding plugin settings
    #[serde(default)]
    pub custom: CustomConfig,
}

/// Provider block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProviderConfig {
    /// Provider name (e.g. "aws")
    #[serde(default)]
    pub name: Option<String>,

    /// Region the secret store lives in
    #[serde(default)]
    pub region: Option<String>,

    /// Default named credential profile
    #[serde(default)]
    pub profile: Option<String>,
}

/// Custom block
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CustomConfig {
    /// Ordered secret references; later entries win on key collisions
    #[serde(default)]
    pub secrets_arn: Option<Vec<String>>,
}

/// Validated settings the secret aggregator runs with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsSettings {
    /// Region for the store client
    pub region: String,

    /// Profile to fall back to when a hook doesn't name one
    pub profile: Option<String>,

    /// Secret references in merge order
    pub secret_refs: Vec<String>,
}

impl SecretsSettings {
    pub fn new(region: impl Into<String>, secret_refs: Vec<String>) -> Self {
        Self {
            region: region.into(),
            profile: None,
            secret_refs,
        }
    }

    pub fn with_profile(mut self, profile: Option<String>) -> Self {
        self.profile = profile;
        self
    }
}
