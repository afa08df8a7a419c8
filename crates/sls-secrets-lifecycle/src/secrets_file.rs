//! Transient secrets file
//!
//! Holds the merged bundle as compact JSON between a "before" hook and its
//! cleanup hook. A missing file is a valid state.

use crate::error::LifecycleError;
use sls_secrets_core::DEFAULT_SECRETS_FILE;
use sls_secrets_store::MergedSecrets;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SecretsFile {
    path: PathBuf,
}

impl SecretsFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Write the bundle, replacing any existing file
    pub fn write(&self, secrets: &MergedSecrets) -> Result<(), LifecycleError> {
        let json = secrets.to_json()?;

        write_private(&self.path, json.as_bytes()).map_err(|source| LifecycleError::FileWrite {
            path: self.path.clone(),
            source,
        })?;

        debug!(
            "Wrote {} secret keys to {}",
            secrets.len(),
            self.path.display()
        );
        Ok(())
    }

    /// Delete the file if present
    ///
    /// Returns `false` when there was nothing to delete.
    pub fn remove(&self) -> Result<bool, LifecycleError> {
        if !self.exists() {
            debug!("No secrets file at {}", self.path.display());
            return Ok(false);
        }

        match fs::remove_file(&self.path) {
            Ok(()) => {
                debug!("Removed {}", self.path.display());
                Ok(true)
            }
            // Removed between the check and the delete
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(source) => Err(LifecycleError::FileDelete {
                path: self.path.clone(),
                source,
            }),
        }
    }

    /// Read the bundle back
    pub fn read(&self) -> Result<MergedSecrets, LifecycleError> {
        let content = fs::read_to_string(&self.path).map_err(|e| LifecycleError::FileRead {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;

        MergedSecrets::from_payload(&content).map_err(|e| LifecycleError::FileRead {
            path: self.path.clone(),
            reason: e.to_string(),
        })
    }

    /// Read a single value
    pub fn get(&self, key: &str) -> Result<String, LifecycleError> {
        self.read()?
            .get(key)
            .map(str::to_string)
            .ok_or_else(|| LifecycleError::KeyNotFound {
                key: key.to_string(),
                path: self.path.clone(),
            })
    }
}

/// Write `contents` readable by the owner only
///
/// A new file is created with mode 0600; an existing file keeps its inode, so
/// its mode is tightened after the write.
#[cfg(unix)]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    use std::io::Write;
    use std::os::unix::fs::{OpenOptionsExt, PermissionsExt};

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create(true)
        .truncate(true)
        .mode(0o600)
        .open(path)?;
    file.write_all(contents)?;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn write_private(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    fs::write(path, contents)
}

impl Default for SecretsFile {
    fn default() -> Self {
        Self::new(DEFAULT_SECRETS_FILE)
    }
}
