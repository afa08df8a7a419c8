//! Secret store trait and client construction parameters

use anyhow::Result;
use async_trait::async_trait;
use sls_secrets_core::ExecutionMode;

/// Response of a get-secret-value call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SecretValueOutput {
    /// Serialized payload; `None` for binary secrets
    pub secret_string: Option<String>,
}

impl SecretValueOutput {
    pub fn from_string(value: impl Into<String>) -> Self {
        Self {
            secret_string: Some(value.into()),
        }
    }
}

/// Trait for secret stores
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait SecretStore: Send + Sync {
    /// Fetch the current value of a secret
    async fn get_secret_value(&self, secret_id: &str) -> Result<SecretValueOutput>;
}

/// Where a store client gets its credentials from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialSource {
    /// Shared config/credentials files; `None` selects the SDK's default
    /// profile (`AWS_PROFILE`, else `default`)
    Profile(Option<String>),
    /// SDK default credential chain (environment, instance role, ...)
    Ambient,
}

/// Parameters a store client is constructed with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    pub region: String,
    pub credentials: CredentialSource,
}

impl ClientOptions {
    /// Build client options for the given execution mode
    ///
    /// Interactive runs are always bound to a profile; CI runs never are.
    pub fn new(region: impl Into<String>, profile: Option<&str>, mode: ExecutionMode) -> Self {
        let credentials = match mode {
            ExecutionMode::Ci => CredentialSource::Ambient,
            ExecutionMode::Interactive => CredentialSource::Profile(profile.map(str::to_string)),
        };

        Self {
            region: region.into(),
            credentials,
        }
    }

    /// Explicitly named profile, if any
    pub fn profile(&self) -> Option<&str> {
        match &self.credentials {
            CredentialSource::Profile(name) => name.as_deref(),
            CredentialSource::Ambient => None,
        }
    }

    pub fn is_profile_bound(&self) -> bool {
        matches!(self.credentials, CredentialSource::Profile(_))
    }
}

/// Builds store clients from [`ClientOptions`]
#[async_trait]
pub trait StoreConnector: Send + Sync {
    async fn connect(&self, options: &ClientOptions) -> Box<dyn SecretStore>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_options_interactive_keeps_profile() {
        let opts = ClientOptions::new("eu-west-1", Some("dev"), ExecutionMode::Interactive);
        assert_eq!(opts.region, "eu-west-1");
        assert_eq!(opts.credentials, CredentialSource::Profile(Some("dev".to_string())));
        assert_eq!(opts.profile(), Some("dev"));
    }

    #[test]
    fn test_client_options_ci_drops_profile() {
        let opts = ClientOptions::new("eu-west-1", Some("dev"), ExecutionMode::Ci);
        assert_eq!(opts.credentials, CredentialSource::Ambient);
        assert_eq!(opts.profile(), None);
        assert!(!opts.is_profile_bound());
    }

    #[test]
    fn test_client_options_interactive_without_profile_stays_bound() {
        let interactive = ClientOptions::new("us-east-1", None, ExecutionMode::Interactive);
        let ci = ClientOptions::new("us-east-1", None, ExecutionMode::Ci);

        assert_eq!(interactive.credentials, CredentialSource::Profile(None));
        assert!(interactive.is_profile_bound());
        assert_ne!(interactive, ci);
    }
}
