//! Infrastructure Layer
//!
//! Concrete implementations of the domain ports: host subprocesses, the
//! local filesystem, the git template source and NDJSON event output.

pub mod events;
pub mod fs;
pub mod metadata;
pub mod process;
pub mod template;

pub use events::JsonEventSink;
pub use fs::{cleanup_temp, copy_tree, create_project_directory, TempWorkspace};
pub use metadata::{update_package_descriptor, update_service_declaration};
pub use process::SystemCommandRunner;
pub use template::GitSparseTemplate;
