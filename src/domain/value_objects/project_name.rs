//! Project Name Value Object

use std::fmt;

use crate::error::{SproutError, SproutResult};

/// Name of the project being scaffolded.
///
/// Used verbatim as the directory name and substituted into `package.json`
/// and `serverless.yml`. Only names that would not denote a new directory
/// are rejected; everything else is left to the filesystem.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: &str) -> SproutResult<Self> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(SproutError::invalid_path(name, "project name is empty"));
        }
        if trimmed == "." || trimmed == ".." {
            return Err(SproutError::invalid_path(
                name,
                "project name must name a new directory",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Description written into `package.json`.
    pub fn description(&self) -> String {
        format!("{} app description", self.0)
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
