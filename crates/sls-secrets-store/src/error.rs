//! Error types for secret loading

use thiserror::Error;

/// Failures while loading secrets from the store
///
/// Both variants abort the whole load; nothing merged so far is returned.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store call failed (network, auth, not found)
    #[error("Failed to fetch secret '{secret_id}': {source}")]
    Fetch {
        secret_id: String,
        #[source]
        source: anyhow::Error,
    },

    /// The payload is not a flat string-to-string JSON object
    #[error("Failed to decode secret '{secret_id}': {reason}")]
    Decode { secret_id: String, reason: String },
}

impl StoreError {
    pub fn fetch(secret_id: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Fetch {
            secret_id: secret_id.into(),
            source,
        }
    }

    pub fn decode(secret_id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Decode {
            secret_id: secret_id.into(),
            reason: reason.into(),
        }
    }

    /// The secret reference the failure is about
    pub fn secret_id(&self) -> &str {
        match self {
            StoreError::Fetch { secret_id, .. } | StoreError::Decode { secret_id, .. } => {
                secret_id
            }
        }
    }
}
