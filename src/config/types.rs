//! Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::application::environment::DEFAULT_MIN_NODE_MAJOR;

pub const DEFAULT_TEMPLATE_REPOSITORY: &str = "https://github.com/sprout-cli/sprout-templates.git";
pub const DEFAULT_TEMPLATE_SUBDIRECTORY: &str = "serverless-node";
pub const DEFAULT_CLONE_TIMEOUT_SECS: u64 = 60;
/// Upper bound for `clone_timeout_secs` (one hour)
pub const MAX_CLONE_TIMEOUT_SECS: u64 = 3600;

/// Where the starter template comes from
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct TemplateConfig {
    pub repository: String,
    pub subdirectory: String,
    pub clone_timeout_secs: u64,
}

impl TemplateConfig {
    /// `clone_timeout_secs` must lie in `1..=MAX_CLONE_TIMEOUT_SECS`.
    pub fn validate(&self) -> Result<(), String> {
        if clone_timeout_in_range(self.clone_timeout_secs) {
            Ok(())
        } else {
            Err(format!(
                "template.clone_timeout_secs = {}: expected {}",
                self.clone_timeout_secs, CLONE_TIMEOUT_RANGE
            ))
        }
    }
}

pub(crate) const CLONE_TIMEOUT_RANGE: &str = "a whole number between 1 and 3600";

pub(crate) fn clone_timeout_in_range(secs: u64) -> bool {
    (1..=MAX_CLONE_TIMEOUT_SECS).contains(&secs)
}

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            repository: DEFAULT_TEMPLATE_REPOSITORY.to_string(),
            subdirectory: DEFAULT_TEMPLATE_SUBDIRECTORY.to_string(),
            clone_timeout_secs: DEFAULT_CLONE_TIMEOUT_SECS,
        }
    }
}

/// Executables Sprout runs
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ToolsConfig {
    pub node: String,
    pub git: String,
    pub package_manager: String,
    pub min_node_major: u32,
}

impl Default for ToolsConfig {
    fn default() -> Self {
        Self {
            node: "node".to_string(),
            git: "git".to_string(),
            package_manager: "npm".to_string(),
            min_node_major: DEFAULT_MIN_NODE_MAJOR,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub template: TemplateConfig,
    pub tools: ToolsConfig,
}

impl Config {
    pub fn clone_timeout(&self) -> Duration {
        Duration::from_secs(self.template.clone_timeout_secs)
    }
}
