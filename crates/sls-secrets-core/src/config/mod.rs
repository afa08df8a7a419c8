//! Configuration loading and management

mod loader;

pub use loader::PluginConfig;
