//! Local filesystem operations used while materializing a project.

mod directory;
mod workspace;
mod writer;

pub use directory::{cleanup_temp, copy_tree, create_project_directory};
pub use workspace::TempWorkspace;
pub use writer::atomic_write;
