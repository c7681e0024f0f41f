//! Scaffold options and result types

use std::path::PathBuf;

use crate::application::environment::DEFAULT_MIN_NODE_MAJOR;
use crate::domain::ports::OutputMode;
use crate::domain::value_objects::ProjectName;

/// Options for a scaffold run
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    pub project_name: ProjectName,
    /// Directory the project is created in (normally the current directory)
    pub base_dir: PathBuf,
    /// Node.js executable
    pub node: String,
    pub min_node_major: u32,
    /// Package manager used for `install --silent`
    pub package_manager: String,
    /// Run the install step
    pub install: bool,
    /// Where the package manager's output goes
    pub install_output: OutputMode,
    /// Where the temporary workspace is created (system temp dir when unset)
    pub temp_root: Option<PathBuf>,
}

impl ScaffoldOptions {
    pub fn new(project_name: ProjectName, base_dir: impl Into<PathBuf>) -> Self {
        Self {
            project_name,
            base_dir: base_dir.into(),
            node: "node".to_string(),
            min_node_major: DEFAULT_MIN_NODE_MAJOR,
            package_manager: "npm".to_string(),
            install: true,
            install_output: OutputMode::Inherit,
            temp_root: None,
        }
    }

    pub fn with_node(mut self, node: impl Into<String>, min_major: u32) -> Self {
        self.node = node.into();
        self.min_node_major = min_major;
        self
    }

    pub fn with_package_manager(mut self, package_manager: impl Into<String>) -> Self {
        self.package_manager = package_manager.into();
        self
    }

    pub fn with_install(mut self, install: bool) -> Self {
        self.install = install;
        self
    }

    /// Keep stdout clean for machine-readable output.
    pub fn with_install_output(mut self, mode: OutputMode) -> Self {
        self.install_output = mode;
        self
    }

    pub fn with_temp_root(mut self, temp_root: impl Into<PathBuf>) -> Self {
        self.temp_root = Some(temp_root.into());
        self
    }
}

/// Result of a successful scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldReport {
    pub project_name: ProjectName,
    pub project_path: PathBuf,
    pub files_copied: usize,
    pub package_descriptor_updated: bool,
    pub service_declaration_updated: bool,
    pub installed: bool,
}
