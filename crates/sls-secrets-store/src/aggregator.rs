//! Secret aggregation
//!
//! Fetches every configured secret reference in order and shallow-merges the
//! payloads into one bundle. One request is in flight at a time and the first
//! failure aborts the load.

use crate::bundle::MergedSecrets;
use crate::error::StoreError;
use crate::store::{ClientOptions, SecretStore, StoreConnector};
use sls_secrets_core::{ExecutionMode, SecretsSettings};
use tracing::info;

/// Loads and merges the configured secrets
pub struct SecretAggregator<'a> {
    settings: &'a SecretsSettings,
    mode: ExecutionMode,
    connector: &'a dyn StoreConnector,
}

impl<'a> SecretAggregator<'a> {
    pub fn new(
        settings: &'a SecretsSettings,
        mode: ExecutionMode,
        connector: &'a dyn StoreConnector,
    ) -> Self {
        Self {
            settings,
            mode,
            connector,
        }
    }

    /// Client options for a load with the given profile override
    pub fn client_options(&self, profile: Option<&str>) -> ClientOptions {
        let profile = profile.or(self.settings.profile.as_deref());
        ClientOptions::new(&self.settings.region, profile, self.mode)
    }

    /// Load every configured secret and merge them
    ///
    /// `profile` overrides the configured default profile.
    pub async fn load_secrets(&self, profile: Option<&str>) -> Result<MergedSecrets, StoreError> {
        let options = self.client_options(profile);
        let store = self.connector.connect(&options).await;

        merge_secrets(store.as_ref(), &self.settings.secret_refs).await
    }
}

/// Fetch `secret_refs` from `store` in order and merge them, later keys winning
pub async fn merge_secrets(
    store: &dyn SecretStore,
    secret_refs: &[String],
) -> Result<MergedSecrets, StoreError> {
    info!("Loading secrets from {:?}", secret_refs);

    let mut merged = MergedSecrets::new();
    for secret_id in secret_refs {
        let value = store
            .get_secret_value(secret_id)
            .await
            .map_err(|e| StoreError::fetch(secret_id, e))?;

        let payload = value
            .secret_string
            .ok_or_else(|| StoreError::decode(secret_id, "secret has no string payload"))?;
        let secrets = MergedSecrets::from_payload(&payload)
            .map_err(|e| StoreError::decode(secret_id, e.to_string()))?;

        info!("Loaded secret {}", secret_id);
        merged.merge(secrets);
    }

    Ok(merged)
}
