//! Scaffold Event Port
//!
//! Progress reporting for the scaffolding pipeline. Purely advisory: sinks
//! must not block and must not fail the run.

use std::path::PathBuf;

/// Pipeline step about to run
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScaffoldStep {
    CheckRuntime,
    CheckVersionControl,
    CreateDirectory,
    FetchTemplate,
    CopyTemplate,
    Cleanup,
    UpdateMetadata,
    InstallDependencies,
}

impl ScaffoldStep {
    /// Stable identifier used in NDJSON output.
    pub fn id(&self) -> &'static str {
        match self {
            ScaffoldStep::CheckRuntime => "check_runtime",
            ScaffoldStep::CheckVersionControl => "check_version_control",
            ScaffoldStep::CreateDirectory => "create_directory",
            ScaffoldStep::FetchTemplate => "fetch_template",
            ScaffoldStep::CopyTemplate => "copy_template",
            ScaffoldStep::Cleanup => "cleanup",
            ScaffoldStep::UpdateMetadata => "update_metadata",
            ScaffoldStep::InstallDependencies => "install_dependencies",
        }
    }
}

/// Event emitted during a scaffold run
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    /// A step is starting
    Step {
        step: ScaffoldStep,
        message: String,
    },

    /// Template files were copied
    Copied { files: usize },

    /// Non-fatal problem (e.g. the workspace could not be removed)
    Warning { message: String },

    /// The install subprocess is about to take over the terminal
    HandOff,

    /// Run completed
    Completed {
        project_path: PathBuf,
        installed: bool,
    },
}

/// Receives scaffold events
pub trait ScaffoldEventSink {
    fn on_event(&self, event: ScaffoldEvent);
}

/// No-op event sink for silent operation
pub struct NoopEventSink;

impl ScaffoldEventSink for NoopEventSink {
    fn on_event(&self, _event: ScaffoldEvent) {}
}
