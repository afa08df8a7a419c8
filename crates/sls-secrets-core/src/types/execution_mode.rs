//! Execution mode (interactive developer session vs automated pipeline)

use crate::{CI_ENV_ENABLED, CI_ENV_VAR};
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the process is being run
///
/// In [`ExecutionMode::Ci`] no named credential profile is bound to the
/// store client; the SDK falls back to its default credential chain.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExecutionMode {
    #[default]
    Interactive,
    Ci,
}

impl ExecutionMode {
    /// Derive the mode from the value of the CI flag variable
    ///
    /// Only the exact value `"yes"` selects CI mode.
    pub fn from_flag(value: Option<&str>) -> Self {
        match value {
            Some(CI_ENV_ENABLED) => ExecutionMode::Ci,
            _ => ExecutionMode::Interactive,
        }
    }

    /// Read the mode from the process environment
    pub fn from_env() -> Self {
        Self::from_flag(std::env::var(CI_ENV_VAR).ok().as_deref())
    }

    pub fn is_ci(self) -> bool {
        matches!(self, ExecutionMode::Ci)
    }
}

impl fmt::Display for ExecutionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExecutionMode::Interactive => write!(f, "interactive"),
            ExecutionMode::Ci => write!(f, "ci"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    #[test]
    fn test_from_flag() {
        assert_eq!(ExecutionMode::from_flag(Some("yes")), ExecutionMode::Ci);
        assert_eq!(
            ExecutionMode::from_flag(Some("YES")),
            ExecutionMode::Interactive
        );
        assert_eq!(
            ExecutionMode::from_flag(Some("true")),
            ExecutionMode::Interactive
        );
        assert_eq!(ExecutionMode::from_flag(None), ExecutionMode::Interactive);
    }

    #[test]
    #[serial]
    fn test_from_env() {
        env::set_var(CI_ENV_VAR, "yes");
        assert!(ExecutionMode::from_env().is_ci());

        env::set_var(CI_ENV_VAR, "no");
        assert!(!ExecutionMode::from_env().is_ci());

        env::remove_var(CI_ENV_VAR);
        assert_eq!(ExecutionMode::from_env(), ExecutionMode::Interactive);
    }

    #[test]
    fn test_display() {
        assert_eq!(ExecutionMode::Ci.to_string(), "ci");
        assert_eq!(ExecutionMode::Interactive.to_string(), "interactive");
    }
}
