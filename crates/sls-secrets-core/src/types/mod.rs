//! Type definitions for sls-secrets

mod config_types;
mod execution_mode;

pub use config_types::*;
pub use execution_mode::ExecutionMode;
