//! AWS Secrets Manager backend
//!
//! The client is bound to the configured region. Interactive runs always read
//! credentials from the shared profile files (the named profile, or the SDK's
//! default profile when none is named); CI runs use the default credential chain.

use crate::store::{ClientOptions, CredentialSource, SecretStore, SecretValueOutput, StoreConnector};
use anyhow::{anyhow, Result};
use async_trait::async_trait;
use aws_config::profile::ProfileFileCredentialsProvider;
use aws_config::BehaviorVersion;
use aws_sdk_secretsmanager::config::Region;
use aws_sdk_secretsmanager::error::DisplayErrorContext;
use aws_sdk_secretsmanager::Client;
use tracing::debug;

/// Secrets Manager client
pub struct AwsSecretsStore {
    client: Client,
    region: String,
}

impl AwsSecretsStore {
    /// Create a client from the given options
    pub async fn new(options: &ClientOptions) -> Self {
        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(options.region.clone()));

        match &options.credentials {
            CredentialSource::Profile(profile) => {
                let mut provider = ProfileFileCredentialsProvider::builder();
                match profile.as_deref() {
                    Some(name) => {
                        debug!("Using credential profile: {}", name);
                        provider = provider.profile_name(name);
                        loader = loader.profile_name(name);
                    }
                    None => debug!("Using default credential profile"),
                }
                loader = loader.credentials_provider(provider.build());
            }
            CredentialSource::Ambient => debug!("Using default credential discovery"),
        }

        let sdk_config = loader.load().await;

        Self {
            client: Client::new(&sdk_config),
            region: options.region.clone(),
        }
    }

    /// Get the region
    pub fn region(&self) -> &str {
        &self.region
    }
}

#[async_trait]
impl SecretStore for AwsSecretsStore {
    async fn get_secret_value(&self, secret_id: &str) -> Result<SecretValueOutput> {
        debug!("GetSecretValue: {} ({})", secret_id, self.region);

        let resp = self
            .client
            .get_secret_value()
            .secret_id(secret_id)
            .send()
            .await
            .map_err(|e| anyhow!("{}", DisplayErrorContext(e)))?;

        Ok(SecretValueOutput {
            secret_string: resp.secret_string,
        })
    }
}

impl std::fmt::Debug for AwsSecretsStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AwsSecretsStore")
            .field("region", &self.region)
            .finish_non_exhaustive()
    }
}

/// Connector that builds [`AwsSecretsStore`] clients
#[derive(Debug, Clone, Copy, Default)]
pub struct AwsConnector;

#[async_trait]
impl StoreConnector for AwsConnector {
    async fn connect(&self, options: &ClientOptions) -> Box<dyn SecretStore> {
        Box::new(AwsSecretsStore::new(options).await)
    }
}
