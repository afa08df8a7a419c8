//! Host configuration file loading and parsing

use crate::error::{Error, Result};
use crate::types::{ServerlessConfigFile, SecretsSettings};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;
use tracing::debug;

/// Configuration file names to search for
const CONFIG_FILE_NAMES: &[&str] = &["serverless.yml", "serverless.yaml"];

/// Loaded host configuration
#[derive(Debug, Clone)]
pub struct PluginConfig {
    /// The parsed configuration
    pub config: ServerlessConfigFile,

    /// Path to the configuration file
    pub config_path: Utf8PathBuf,

    /// Directory containing the configuration file
    pub working_dir: Utf8PathBuf,
}

impl PluginConfig {
    /// Load configuration from the specified path or search for it
    pub fn load(path: Option<&Utf8Path>) -> Result<Self> {
        let (config_path, content) = if let Some(p) = path {
            let content = fs::read_to_string(p).map_err(|e| {
                if e.kind() == std::io::ErrorKind::NotFound {
                    Error::config_not_found(p.as_str())
                } else {
                    Error::Io(e)
                }
            })?;
            (p.to_owned(), content)
        } else {
            let cwd = std::env::current_dir().map_err(Error::Io)?;
            let cwd = Utf8PathBuf::try_from(cwd)
                .map_err(|_| Error::invalid_config("Current directory path is not valid UTF-8"))?;
            Self::find_config(&cwd)?
        };

        debug!("Loading host configuration from {}", config_path);
        let config = Self::parse(&content)?;

        let working_dir = config_path
            .parent()
            .map(|p| p.to_owned())
            .unwrap_or_else(|| Utf8PathBuf::from("."));

        Ok(Self {
            config,
            config_path,
            working_dir,
        })
    }

    /// Parse configuration from YAML text
    pub fn parse(content: &str) -> Result<ServerlessConfigFile> {
        let config: ServerlessConfigFile = serde_yaml_ng::from_str(content)?;
        Ok(config)
    }

    /// Find configuration file in `start` or its parent directories
    fn find_config(start: &Utf8Path) -> Result<(Utf8PathBuf, String)> {
        let mut current = start;

        loop {
            for name in CONFIG_FILE_NAMES {
                let path = current.join(name);
                if path.exists() {
                    let content = fs::read_to_string(&path)?;
                    return Ok((path, content));
                }
            }

            match current.parent() {
                Some(parent) => current = parent,
                None => break,
            }
        }

        Err(Error::config_not_found(
            "serverless.yml (searched current and parent directories)",
        ))
    }

    /// Get the inner configuration file
    pub fn inner(&self) -> &ServerlessConfigFile {
        &self.config
    }

    /// Get the provider region
    pub fn region(&self) -> Result<&str> {
        self.config
            .provider
            .region
            .as_deref()
            .filter(|r| !r.trim().is_empty())
            .ok_or_else(|| Error::missing_field("provider.region"))
    }

    /// Get the default credential profile
    pub fn profile(&self) -> Option<&str> {
        self.config.provider.profile.as_deref()
    }

    /// Get the ordered secret references
    pub fn secret_refs(&self) -> Result<&[String]> {
        self.config
            .custom
            .secrets_arn
            .as_deref()
            .ok_or_else(|| Error::missing_field("custom.secrets_arn"))
    }

    /// Validate and extract the settings the secret aggregator needs
    pub fn settings(&self) -> Result<SecretsSettings> {
        Ok(
            SecretsSettings::new(self.region()?, self.secret_refs()?.to_vec())
                .with_profile(self.profile().map(str::to_string)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
service: tracker-api
provider:
  name: aws
  runtime: python3.12
  region: eu-west-1
  profile: tracker-dev
custom:
  secrets_arn:
    - arn:a
    - arn:b
functions:
  api:
    handler: main.handler
"#;

    fn write_config(dir: &TempDir, name: &str, content: &str) -> Utf8PathBuf {
        let path = Utf8PathBuf::from_path_buf(dir.path().join(name)).expect("Invalid UTF-8 path");
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_load_explicit_path() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "serverless.yml", SAMPLE);

        let config = PluginConfig::load(Some(&path)).unwrap();
        assert_eq!(config.region().unwrap(), "eu-west-1");
        assert_eq!(config.profile(), Some("tracker-dev"));
        assert_eq!(config.secret_refs().unwrap(), ["arn:a", "arn:b"]);
        assert_eq!(config.working_dir, path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let path = Utf8PathBuf::from_path_buf(temp.path().join("nope.yml")).unwrap();

        let err = PluginConfig::load(Some(&path)).unwrap_err();
        assert!(matches!(err, Error::ConfigNotFound { .. }));
    }

    #[test]
    fn test_find_config_in_parent() {
        let temp = TempDir::new().unwrap();
        write_config(&temp, "serverless.yaml", SAMPLE);
        let nested = temp.path().join("src").join("handlers");
        fs::create_dir_all(&nested).unwrap();
        let nested = Utf8PathBuf::from_path_buf(nested).unwrap();

        let (path, content) = PluginConfig::find_config(&nested).unwrap();
        assert!(path.as_str().ends_with("serverless.yaml"));
        assert!(content.contains("tracker-api"));
    }

    #[test]
    fn test_settings() {
        let temp = TempDir::new().unwrap();
        let path = write_config(&temp, "serverless.yml", SAMPLE);
        let config = PluginConfig::load(Some(&path)).unwrap();

        let settings = config.settings().unwrap();
        assert_eq!(settings.region, "eu-west-1");
        assert_eq!(settings.profile.as_deref(), Some("tracker-dev"));
        assert_eq!(settings.secret_refs, vec!["arn:a", "arn:b"]);
    }

    #[test]
    fn test_missing_region() {
        let temp = TempDir::new().unwrap();
        let path = write_config(
            &temp,
            "serverless.yml",
            "provider:\n  name: aws\ncustom:\n  secrets_arn: []\n",
        );
        let config = PluginConfig::load(Some(&path)).unwrap();

        let err = config.settings().unwrap_err();
        assert!(err.to_string().contains("provider.region"));
    }

    #[test]
    fn test_missing_secret_refs() {
        let config = PluginConfig {
            config: PluginConfig::parse("provider:\n  region: us-east-1\n").unwrap(),
            config_path: Utf8PathBuf::from("serverless.yml"),
            working_dir: Utf8PathBuf::from("."),
        };

        let err = config.settings().unwrap_err();
        assert!(err.to_string().contains("custom.secrets_arn"));
    }

    #[test]
    fn test_empty_secret_refs_allowed() {
        let parsed =
            PluginConfig::parse("provider:\n  region: us-east-1\ncustom:\n  secrets_arn: []\n")
                .unwrap();
        let config = PluginConfig {
            config: parsed,
            config_path: Utf8PathBuf::from("serverless.yml"),
            working_dir: Utf8PathBuf::from("."),
        };

        let settings = config.settings().unwrap();
        assert!(settings.secret_refs.is_empty());
        assert_eq!(settings.profile, None);
    }

    #[test]
    fn test_invalid_yaml() {
        let err = PluginConfig::parse("provider: [unclosed").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }
}
