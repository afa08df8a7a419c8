//! Lifecycle hooks for sls-secrets
//!
//! Binds host lifecycle events to three handler families:
//! - **Load**: fetch and merge secrets, then write the transient secrets file
//! - **Offline load**: same, using the offline credential profile
//! - **Cleanup**: delete the transient secrets file if present

pub mod error;
pub mod hooks;
pub mod secrets_file;

pub use error::LifecycleError;
pub use hooks::{
    cleanup, run_hook, HookAction, HookBinding, HookContext, HookOutcome, HookRegistry,
};
pub use secrets_file::SecretsFile;
