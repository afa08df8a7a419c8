//! Secret store access for sls-secrets
//!
//! This crate provides:
//! - **Store seam**: the `SecretStore` / `StoreConnector` traits the aggregator talks to
//! - **AWS backend**: Secrets Manager client bound to a region and optional profile
//! - **Aggregation**: sequential fetch of every configured secret, shallow-merged in order

pub mod aggregator;
pub mod aws;
pub mod bundle;
pub mod error;
pub mod store;

pub use aggregator::{merge_secrets, SecretAggregator};
pub use aws::{AwsConnector, AwsSecretsStore};
pub use bundle::MergedSecrets;
pub use error::StoreError;
pub use store::{ClientOptions, CredentialSource, SecretStore, SecretValueOutput, StoreConnector};
