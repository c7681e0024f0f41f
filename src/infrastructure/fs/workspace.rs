//! Temporary workspace owned by a single scaffold run.

use std::path::Path;

use chrono::Utc;
use tempfile::TempDir;

use super::cleanup_temp;
use crate::domain::value_objects::SanitizedPath;
use crate::error::SproutResult;

/// Run-unique scratch directory.
///
/// The name combines a timestamp with a random suffix so concurrent runs
/// never share a workspace. Dropping the workspace removes it and ignores
/// any error; [`TempWorkspace::remove`] reports the error instead.
#[derive(Debug)]
pub struct TempWorkspace {
    path: SanitizedPath,
    _dir: TempDir,
}

impl TempWorkspace {
    /// Create a workspace under the system temp directory.
    pub fn create() -> SproutResult<Self> {
        Self::create_in(&std::env::temp_dir())
    }

    pub fn create_in(base: &Path) -> SproutResult<Self> {
        let prefix = format!("sprout-{}-", Utc::now().format("%Y%m%d%H%M%S%3f"));
        let dir = tempfile::Builder::new().prefix(&prefix).tempdir_in(base)?;
        let path = SanitizedPath::from_path(dir.path())?;
        Ok(Self { path, _dir: dir })
    }

    pub fn path(&self) -> &SanitizedPath {
        &self.path
    }

    /// Remove the workspace, surfacing failures.
    pub fn remove(self) -> SproutResult<()> {
        cleanup_temp(self.path.as_path())
    }
}
