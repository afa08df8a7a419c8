//! Lifecycle hook adapter
//!
//! The host owns scheduling: it invokes a named event zero or more times, in
//! an order it controls, never concurrently. Each handler takes everything it
//! needs through [`HookContext`].

use crate::error::LifecycleError;
use crate::secrets_file::SecretsFile;
use serde::Serialize;
use sls_secrets_core::{ExecutionMode, SecretsSettings, OFFLINE_PROFILE};
use sls_secrets_store::{SecretAggregator, StoreConnector};
use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use tracing::{debug, info};

/// Handler family bound to a lifecycle event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum HookAction {
    /// Load with the configured profile and write the secrets file
    LoadSecrets,
    /// Load with the offline profile and write the secrets file
    LoadOfflineSecrets,
    /// Delete the secrets file if present
    Cleanup,
}

impl fmt::Display for HookAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HookAction::LoadSecrets => write!(f, "load-secrets"),
            HookAction::LoadOfflineSecrets => write!(f, "load-offline-secrets"),
            HookAction::Cleanup => write!(f, "cleanup"),
        }
    }
}

/// One event → handler binding
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HookBinding {
    pub event: &'static str,
    pub action: HookAction,
}

const fn bind(event: &'static str, action: HookAction) -> HookBinding {
    HookBinding { event, action }
}

/// Events the plugin registers with the host
pub const HOOK_BINDINGS: &[HookBinding] = &[
    bind("before:package:initialize", HookAction::LoadSecrets),
    bind("before:deploy:function:initialize", HookAction::LoadSecrets),
    bind("before:invoke:local:invoke", HookAction::LoadSecrets),
    // serverless-offline
    bind("before:offline:start:init", HookAction::LoadOfflineSecrets),
    bind("after:package:finalize", HookAction::Cleanup),
    bind("after:deploy:finalize", HookAction::Cleanup),
    bind("after:deploy:function:deploy", HookAction::Cleanup),
    bind("after:invoke:local:invoke", HookAction::Cleanup),
    bind("before:offline:start:end", HookAction::Cleanup),
];

/// What a hook invocation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HookOutcome {
    Written { keys: usize, path: PathBuf },
    Removed { path: PathBuf },
    NothingToRemove,
}

/// Inputs a hook handler runs with
pub struct HookContext<'a> {
    pub settings: &'a SecretsSettings,
    pub mode: ExecutionMode,
    pub connector: &'a dyn StoreConnector,
    pub secrets_file: &'a SecretsFile,
}

impl<'a> HookContext<'a> {
    pub fn new(
        settings: &'a SecretsSettings,
        mode: ExecutionMode,
        connector: &'a dyn StoreConnector,
        secrets_file: &'a SecretsFile,
    ) -> Self {
        Self {
            settings,
            mode,
            connector,
            secrets_file,
        }
    }

    fn aggregator(&self) -> SecretAggregator<'a> {
        SecretAggregator::new(self.settings, self.mode, self.connector)
    }
}

/// Run the handler for `action`
pub async fn run_hook(
    action: HookAction,
    ctx: &HookContext<'_>,
) -> Result<HookOutcome, LifecycleError> {
    debug!("Running {} hook ({} mode)", action, ctx.mode);

    match action {
        HookAction::LoadSecrets => load_and_write(ctx, None).await,
        HookAction::LoadOfflineSecrets => load_and_write(ctx, Some(OFFLINE_PROFILE)).await,
        HookAction::Cleanup => cleanup(ctx.secrets_file),
    }
}

async fn load_and_write(
    ctx: &HookContext<'_>,
    profile: Option<&str>,
) -> Result<HookOutcome, LifecycleError> {
    // Nothing touches the file until every secret has loaded
    let secrets = ctx.aggregator().load_secrets(profile).await?;
    ctx.secrets_file.write(&secrets)?;

    info!(
        "Wrote {} secret keys to {}",
        secrets.len(),
        ctx.secrets_file.path().display()
    );

    Ok(HookOutcome::Written {
        keys: secrets.len(),
        path: ctx.secrets_file.path().to_path_buf(),
    })
}

/// Delete the secrets file if present
///
/// Needs neither host configuration nor a store client.
pub fn cleanup(secrets_file: &SecretsFile) -> Result<HookOutcome, LifecycleError> {
    if secrets_file.remove()? {
        info!("Removed {}", secrets_file.path().display());
        Ok(HookOutcome::Removed {
            path: secrets_file.path().to_path_buf(),
        })
    } else {
        Ok(HookOutcome::NothingToRemove)
    }
}

/// Event name → handler family table handed to the host
#[derive(Debug, Clone)]
pub struct HookRegistry {
    bindings: BTreeMap<&'static str, HookAction>,
}

impl HookRegistry {
    pub fn new() -> Self {
        Self::from_bindings(HOOK_BINDINGS)
    }

    pub fn from_bindings(bindings: &[HookBinding]) -> Self {
        Self {
            bindings: bindings.iter().map(|b| (b.event, b.action)).collect(),
        }
    }

    /// Handler family bound to `event`
    pub fn action_for(&self, event: &str) -> Option<HookAction> {
        self.bindings.get(event).copied()
    }

    pub fn bindings(&self) -> impl Iterator<Item = HookBinding> + '_ {
        self.bindings
            .iter()
            .map(|(event, action)| HookBinding {
                event: *event,
                action: *action,
            })
    }

    pub fn events(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.bindings.keys().copied()
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Run the handler bound to `event`
    pub async fn dispatch(
        &self,
        event: &str,
        ctx: &HookContext<'_>,
    ) -> Result<HookOutcome, LifecycleError> {
        let action = self
            .action_for(event)
            .ok_or_else(|| LifecycleError::UnknownEvent {
                event: event.to_string(),
            })?;

        info!("Lifecycle event {} -> {}", event, action);
        run_hook(action, ctx).await
    }
}

impl Default for HookRegistry {
    fn default() -> Self {
        Self::new()
    }
}
