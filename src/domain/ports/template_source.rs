//! Template Source Port

use std::path::PathBuf;

use crate::domain::value_objects::SanitizedPath;
use crate::error::SproutResult;

/// Produces the boilerplate tree inside a temporary workspace.
pub trait TemplateSource {
    /// Materialize the template below `workspace` and return the root of the tree.
    fn acquire(&self, workspace: &SanitizedPath) -> SproutResult<PathBuf>;

    /// Executable that must be installed before `acquire` can work, if any.
    fn required_tool(&self) -> Option<&str> {
        None
    }

    /// Short description for progress output.
    fn describe(&self) -> String;
}
