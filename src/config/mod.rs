//! Configuration module for Sprout
//!
//! Configuration hierarchy:
//! 1. CLI flags (highest priority)
//! 2. Environment variables (SPROUT_*)
//! 3. Config file (`--config`, `SPROUT_CONFIG`, or ~/.config/sprout/config.toml)
//! 4. Built-in defaults (lowest priority)

mod loader;
mod types;

pub use loader::{
    apply_env_overrides, default_config_path, load, load_with_warnings, ConfigWarning,
    LoadedConfig, CONFIG_PATH_VAR,
};
pub use types::{
    Config, TemplateConfig, ToolsConfig, DEFAULT_CLONE_TIMEOUT_SECS, DEFAULT_TEMPLATE_REPOSITORY,
    DEFAULT_TEMPLATE_SUBDIRECTORY, MAX_CLONE_TIMEOUT_SECS,
};
