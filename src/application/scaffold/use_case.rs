//! Scaffold use case implementation

use std::path::Path;

use tracing::{debug, warn};

use super::options::{ScaffoldOptions, ScaffoldReport};
use crate::application::environment::{check_runtime_version, check_tool_installed};
use crate::domain::ports::{
    CommandError, CommandRunner, CommandSpec, ScaffoldEvent, ScaffoldEventSink, ScaffoldStep,
    TemplateSource,
};
use crate::domain::value_objects::SanitizedPath;
use crate::error::{SproutError, SproutResult};
use crate::infrastructure::fs::{copy_tree, create_project_directory, TempWorkspace};
use crate::infrastructure::metadata::{update_package_descriptor, update_service_declaration};

/// Creates a project from a template.
///
/// All collaborators are supplied by the caller.
pub struct Scaffolder<'a> {
    runner: &'a dyn CommandRunner,
    template: &'a dyn TemplateSource,
    events: &'a dyn ScaffoldEventSink,
}

impl<'a> Scaffolder<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        template: &'a dyn TemplateSource,
        events: &'a dyn ScaffoldEventSink,
    ) -> Self {
        Self {
            runner,
            template,
            events,
        }
    }

    pub fn run(&self, options: &ScaffoldOptions) -> SproutResult<ScaffoldReport> {
        let name = &options.project_name;
        let project_path =
            SanitizedPath::from_path(&options.base_dir.join(name.as_str()))?;
        debug!(project = %name, path = %project_path, "scaffolding");

        self.step(
            ScaffoldStep::CheckRuntime,
            format!("Checking Node.js (>= {})", options.min_node_major),
        );
        check_runtime_version(self.runner, &options.node, options.min_node_major)?;

        if let Some(tool) = self.template.required_tool() {
            self.step(
                ScaffoldStep::CheckVersionControl,
                format!("Checking {}", tool),
            );
            check_tool_installed(self.runner, tool)?;
        }

        self.step(
            ScaffoldStep::CreateDirectory,
            format!("Creating {}", project_path),
        );
        create_project_directory(project_path.as_path())?;

        self.step(
            ScaffoldStep::FetchTemplate,
            format!("Fetching template from {}", self.template.describe()),
        );
        let workspace = match &options.temp_root {
            Some(root) => TempWorkspace::create_in(root)?,
            None => TempWorkspace::create()?,
        };

        let files_copied = match self.materialize(&workspace, project_path.as_path()) {
            Ok(files) => files,
            Err(err) => {
                discard_workspace(workspace);
                return Err(err);
            }
        };
        self.events.on_event(ScaffoldEvent::Copied {
            files: files_copied,
        });

        self.step(ScaffoldStep::Cleanup, "Removing temporary files".to_string());
        let workspace_path = workspace.path().to_string();
        if let Err(err) = workspace.remove() {
            warn!(path = %workspace_path, error = %err, "could not remove temporary workspace");
            self.events.on_event(ScaffoldEvent::Warning {
                message: format!(
                    "could not remove temporary directory {}: {}",
                    workspace_path, err
                ),
            });
        }

        self.step(
            ScaffoldStep::UpdateMetadata,
            format!("Naming project {}", name),
        );
        let package_descriptor_updated = update_package_descriptor(project_path.as_path(), name)?;
        let service_declaration_updated =
            update_service_declaration(project_path.as_path(), name)?;

        if options.install {
            self.step(
                ScaffoldStep::InstallDependencies,
                format!("Installing dependencies with {}", options.package_manager),
            );
            self.events.on_event(ScaffoldEvent::HandOff);
            self.install(options, &project_path)?;
        }

        let project_path = project_path.into_path_buf();
        self.events.on_event(ScaffoldEvent::Completed {
            project_path: project_path.clone(),
            installed: options.install,
        });

        Ok(ScaffoldReport {
            project_name: name.clone(),
            project_path,
            files_copied,
            package_descriptor_updated,
            service_declaration_updated,
            installed: options.install,
        })
    }

    fn step(&self, step: ScaffoldStep, message: String) {
        self.events.on_event(ScaffoldEvent::Step { step, message });
    }

    fn materialize(&self, workspace: &TempWorkspace, project_path: &Path) -> SproutResult<usize> {
        let template_root = self.template.acquire(workspace.path())?;

        self.step(
            ScaffoldStep::CopyTemplate,
            format!("Copying template into {}", project_path.display()),
        );
        copy_tree(&template_root, project_path)
    }

    fn install(&self, options: &ScaffoldOptions, project_path: &SanitizedPath) -> SproutResult<()> {
        let spec = CommandSpec::new(&options.package_manager)
            .args(["install", "--silent"])
            .current_dir(project_path)
            .output(options.install_output);

        let output = self.runner.run(&spec).map_err(|err| match err {
            CommandError::Spawn { program, .. } => SproutError::MissingDependency { tool: program },
            CommandError::TimedOut { command, .. } => SproutError::CommandFailed {
                command,
                code: None,
            },
            CommandError::Io { source, .. } => SproutError::Io(source),
        })?;

        if !output.success {
            return Err(SproutError::CommandFailed {
                command: spec.display(),
                code: output.code,
            });
        }
        Ok(())
    }
}

/// Best-effort removal on the failure path; the original error wins.
fn discard_workspace(workspace: TempWorkspace) {
    let path = workspace.path().to_string();
    if let Err(err) = workspace.remove() {
        debug!(path = %path, error = %err, "ignoring workspace cleanup failure");
    }
}
