//! Create a project: `sprout <PROJECT_NAME>`

use anyhow::{Context, Result};

use sprout::config::{self, Config};
use sprout::domain::ports::OutputMode;
use sprout::infrastructure::{GitSparseTemplate, JsonEventSink, SystemCommandRunner};
use sprout::{ProjectName, ScaffoldOptions, Scaffolder};
use tracing::debug;

use crate::cli::Cli;
use crate::ui::context::UiContext;
use crate::ui::status::StatusLine;
use crate::ui::views::complete::render_complete;
use crate::ui::views::warnings::render_config_warnings;

pub fn cmd_new(cli: &Cli, ui: &UiContext) -> Result<()> {
    let loaded = config::load(cli.config.as_deref())?;
    if let Some(file) = &loaded.file {
        debug!(file = %file.display(), "loaded config");
    }
    if !loaded.warnings.is_empty() {
        eprint!(
            "{}",
            render_config_warnings(&loaded.warnings, ui.color, ui.unicode)
        );
    }

    let mut config = loaded.config;
    apply_cli_overrides(&mut config, cli);

    let project_name = ProjectName::new(&cli.project_name)?;
    let base_dir = std::env::current_dir().context("could not read the current directory")?;

    let runner = SystemCommandRunner::new();
    let template = GitSparseTemplate::new(
        &runner,
        config.tools.git.as_str(),
        &config.template.repository,
        &config.template.subdirectory,
        config.clone_timeout(),
    )?;

    let options = ScaffoldOptions::new(project_name, base_dir)
        .with_node(config.tools.node.as_str(), config.tools.min_node_major)
        .with_package_manager(config.tools.package_manager.as_str())
        .with_install(!cli.skip_install);

    if ui.json {
        let options = options.with_install_output(OutputMode::InheritToStderr);
        let sink = JsonEventSink::stdout();
        Scaffolder::new(&runner, &template, &sink).run(&options)?;
        return Ok(());
    }

    let status = StatusLine::stderr(ui);
    let result = Scaffolder::new(&runner, &template, &status).run(&options);
    status.clear();
    let report = result?;

    print!(
        "{}",
        render_complete(
            &report,
            &config.tools.package_manager,
            ui.color,
            ui.unicode
        )
    );
    Ok(())
}

/// Flags win over file and environment.
fn apply_cli_overrides(config: &mut Config, cli: &Cli) {
    if let Some(repo) = &cli.template_repo {
        config.template.repository = repo.clone();
    }
    if let Some(dir) = &cli.template_dir {
        config.template.subdirectory = dir.clone();
    }
    if let Some(pm) = &cli.package_manager {
        config.tools.package_manager = pm.clone();
    }
}
