//! Error types for lifecycle hooks

use sls_secrets_store::StoreError;
use std::path::PathBuf;
use thiserror::Error;

/// Failures surfaced from a hook invocation
#[derive(Error, Debug)]
pub enum LifecycleError {
    /// Loading secrets from the store failed
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Writing the transient secrets file failed
    #[error("Failed to write secrets file {}: {source}", .path.display())]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Deleting the transient secrets file failed
    #[error("Failed to delete secrets file {}: {source}", .path.display())]
    FileDelete {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Reading the transient secrets file failed
    #[error("Failed to read secrets file {}: {reason}", .path.display())]
    FileRead { path: PathBuf, reason: String },

    /// Key not present in the transient secrets file
    #[error("Secret key '{key}' not found in {}", .path.display())]
    KeyNotFound { key: String, path: PathBuf },

    /// Serializing the bundle failed
    #[error("Failed to serialize secrets: {0}")]
    Serialize(#[from] serde_json::Error),

    /// No handler is bound to the event name
    #[error("Unknown lifecycle event: {event}. Run `sls-secrets hooks` to list bound events")]
    UnknownEvent { event: String },
}
