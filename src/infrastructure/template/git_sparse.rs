//! Git sparse-clone template source
//!
//! Fetches a single subdirectory of the template repository with a shallow,
//! blob-filtered, sparse clone:
//!
//! ```text
//! git clone --depth 1 --filter=blob:none --sparse <url> <workspace>/template-repo
//! git sparse-checkout set <subdir>        (cwd: <workspace>/template-repo)
//! ```

use std::path::{Component, Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::ports::{CommandRunner, CommandSpec, OutputMode, TemplateSource};
use crate::domain::value_objects::{SanitizedPath, FORBIDDEN_CHARS};
use crate::error::{SproutError, SproutResult};

/// Directory inside the workspace that receives the clone.
pub const CLONE_DIR_NAME: &str = "template-repo";

/// Deadline used when `now + timeout` is not representable.
const FALLBACK_FETCH_TIMEOUT: Duration = Duration::from_secs(60 * 60);

/// Template fetched from a git repository.
pub struct GitSparseTemplate<'a> {
    runner: &'a dyn CommandRunner,
    git: String,
    repository: String,
    subdirectory: String,
    timeout: Duration,
}

impl<'a> GitSparseTemplate<'a> {
    pub fn new(
        runner: &'a dyn CommandRunner,
        git: impl Into<String>,
        repository: &str,
        subdirectory: &str,
        timeout: Duration,
    ) -> SproutResult<Self> {
        if timeout.is_zero() {
            return Err(SproutError::acquisition(
                "template fetch timeout must be at least one second",
            ));
        }
        Ok(Self {
            runner,
            git: git.into(),
            repository: validate_repository(repository)?,
            subdirectory: validate_subdirectory(subdirectory)?,
            timeout,
        })
    }

    fn run_git(&self, spec: CommandSpec, deadline: Instant) -> SproutResult<()> {
        let remaining = deadline.saturating_duration_since(Instant::now());
        if remaining.is_zero() {
            return Err(SproutError::acquisition(format!(
                "`{}` not started: template fetch exceeded {}s",
                spec.display(),
                self.timeout.as_secs()
            )));
        }

        let spec = spec.output(OutputMode::Capture).timeout(remaining);
        let output = self
            .runner
            .run(&spec)
            .map_err(|e| SproutError::acquisition(e.to_string()))?;

        if !output.success {
            let code = output
                .code
                .map(|c| c.to_string())
                .unwrap_or_else(|| "signal".to_string());
            let stderr = output.stderr.trim();
            let detail = if stderr.is_empty() {
                String::new()
            } else {
                format!(": {}", stderr)
            };
            return Err(SproutError::acquisition(format!(
                "`{}` exited with {}{}",
                spec.display(),
                code,
                detail
            )));
        }

        Ok(())
    }
}

impl TemplateSource for GitSparseTemplate<'_> {
    fn acquire(&self, workspace: &SanitizedPath) -> SproutResult<PathBuf> {
        let workspace = SanitizedPath::from_path(workspace.as_path())?;
        let clone_dir = workspace.join(CLONE_DIR_NAME)?;
        let started = Instant::now();
        let deadline = started
            .checked_add(self.timeout)
            .unwrap_or_else(|| started + FALLBACK_FETCH_TIMEOUT);

        debug!(
            repository = %self.repository,
            subdirectory = %self.subdirectory,
            dest = %clone_dir,
            "cloning template"
        );

        let clone = CommandSpec::new(&self.git)
            .args(["clone", "--depth", "1", "--filter=blob:none", "--sparse"])
            .arg(&self.repository)
            .arg(clone_dir.as_path())
            .env("GIT_TERMINAL_PROMPT", "0");
        self.run_git(clone, deadline)?;

        let checkout = CommandSpec::new(&self.git)
            .args(["sparse-checkout", "set"])
            .arg(&self.subdirectory)
            .current_dir(clone_dir.as_path());
        self.run_git(checkout, deadline)?;

        let template_root = clone_dir.join(&self.subdirectory)?;
        if !template_root.as_path().is_dir() {
            return Err(SproutError::acquisition(format!(
                "directory '{}' not found in {}",
                self.subdirectory, self.repository
            )));
        }

        Ok(template_root.into_path_buf())
    }

    fn required_tool(&self) -> Option<&str> {
        Some(&self.git)
    }

    fn describe(&self) -> String {
        format!("{} ({})", self.repository, self.subdirectory)
    }
}

fn validate_repository(repository: &str) -> SproutResult<String> {
    let trimmed = repository.trim();
    if trimmed.is_empty() {
        return Err(SproutError::acquisition("template repository is not set"));
    }
    if trimmed.starts_with('-') {
        return Err(SproutError::invalid_path(
            repository,
            "repository must not start with '-'",
        ));
    }
    if trimmed.contains('\0') || trimmed.chars().any(char::is_whitespace) {
        return Err(SproutError::invalid_path(
            repository,
            "repository must not contain whitespace or NUL",
        ));
    }
    Ok(trimmed.to_string())
}

fn validate_subdirectory(subdirectory: &str) -> SproutResult<String> {
    let trimmed = subdirectory.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(SproutError::invalid_path(
            subdirectory,
            "template subdirectory is empty",
        ));
    }
    if trimmed.starts_with('-') {
        return Err(SproutError::invalid_path(
            subdirectory,
            "template subdirectory must not start with '-'",
        ));
    }
    if trimmed.contains(FORBIDDEN_CHARS) {
        return Err(SproutError::invalid_path(
            subdirectory,
            "template subdirectory contains a forbidden character",
        ));
    }
    let path = Path::new(trimmed);
    let escapes = path
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        return Err(SproutError::invalid_path(
            subdirectory,
            "template subdirectory must be a relative path inside the repository",
        ));
    }
    Ok(trimmed.to_string())
}
