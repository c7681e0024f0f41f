//! Test environment builder for isolated Sprout runs.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::TempDir;

use super::template::TemplateRepo;

/// Variables that would leak the developer's setup into a test run.
const INHERITED_VARS: &[&str] = &[
    "SPROUT_CONFIG",
    "SPROUT_TEMPLATE_REPO",
    "SPROUT_TEMPLATE_DIR",
    "SPROUT_CLONE_TIMEOUT_SECS",
    "SPROUT_NODE",
    "SPROUT_GIT",
    "SPROUT_PACKAGE_MANAGER",
    "SPROUT_MIN_NODE_MAJOR",
    "RUST_LOG",
];

/// Result of running the sprout binary
#[derive(Debug)]
pub struct TestResult {
    pub success: bool,
    pub exit_code: i32,
    pub stdout: String,
    pub stderr: String,
}

impl TestResult {
    pub fn combined_output(&self) -> String {
        format!("{}\n{}", self.stdout, self.stderr)
    }
}

/// Isolated environment: a working directory the project is created in,
/// a private HOME, and a directory of fake executables.
pub struct TestEnv {
    pub work_dir: TempDir,
    pub home_dir: TempDir,
    tools_dir: TempDir,
    template: Option<TemplateRepo>,
    env: Vec<(String, String)>,
}

impl TestEnv {
    pub fn builder() -> TestEnvBuilder {
        TestEnvBuilder::default()
    }

    pub fn work_path(&self, relative: &str) -> PathBuf {
        self.work_dir.path().join(relative)
    }

    pub fn tool_path(&self, name: &str) -> PathBuf {
        self.tools_dir.path().join(name)
    }

    /// Lines logged by the fake package manager (`<cwd> <args>`).
    pub fn package_manager_log(&self) -> Vec<String> {
        fs::read_to_string(self.tool_path("pm.log"))
            .map(|s| s.lines().map(str::to_string).collect())
            .unwrap_or_default()
    }

    pub fn write_work_file(&self, relative: &str, content: &str) {
        let path = self.work_path(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create directories");
        }
        fs::write(path, content).expect("Failed to write file");
    }

    pub fn run(&self, args: &[&str]) -> TestResult {
        self.run_with_env(args, &[])
    }

    pub fn run_with_env(&self, args: &[&str], env_vars: &[(&str, &str)]) -> TestResult {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_sprout"));
        cmd.current_dir(self.work_dir.path()).args(args);

        for var in INHERITED_VARS {
            cmd.env_remove(var);
        }
        cmd.env("HOME", self.home_dir.path())
            .env("USERPROFILE", self.home_dir.path())
            .env("XDG_CONFIG_HOME", self.home_dir.path().join(".config"))
            .env("SPROUT_NO_COLOR", "1")
            .env("LANG", "en_US.UTF-8");

        if let Some(template) = &self.template {
            cmd.env("SPROUT_TEMPLATE_REPO", template.url())
                .env("SPROUT_TEMPLATE_DIR", template.subdirectory());
        }
        for (key, value) in &self.env {
            cmd.env(key, value);
        }
        for (key, value) in env_vars {
            cmd.env(key, value);
        }

        to_result(cmd.output().expect("Failed to execute sprout"))
    }
}

fn to_result(output: Output) -> TestResult {
    TestResult {
        success: output.status.success(),
        exit_code: output.status.code().unwrap_or(-1),
        stdout: String::from_utf8_lossy(&output.stdout).to_string(),
        stderr: String::from_utf8_lossy(&output.stderr).to_string(),
    }
}

#[derive(Default)]
pub struct TestEnvBuilder {
    node_version: Option<String>,
    package_manager_exit: Option<i32>,
    fake_git: bool,
    template: Option<TemplateRepo>,
}

impl TestEnvBuilder {
    /// Install a fake `node` printing `version`.
    pub fn node_version(mut self, version: &str) -> Self {
        self.node_version = Some(version.to_string());
        self
    }

    /// Install a fake package manager that prints to stdout and exits with `code`.
    pub fn package_manager_exit(mut self, code: i32) -> Self {
        self.package_manager_exit = Some(code);
        self
    }

    /// Install a fake `git` that succeeds without doing anything.
    pub fn fake_git(mut self) -> Self {
        self.fake_git = true;
        self
    }

    pub fn template(mut self, template: TemplateRepo) -> Self {
        self.template = Some(template);
        self
    }

    pub fn build(self) -> TestEnv {
        let work_dir = TempDir::new().expect("Failed to create work dir");
        let home_dir = TempDir::new().expect("Failed to create home dir");
        let tools_dir = TempDir::new().expect("Failed to create tools dir");
        let mut env = Vec::new();

        if let Some(version) = &self.node_version {
            let node = write_script(tools_dir.path(), "node", &format!("echo {}", version));
            env.push(("SPROUT_NODE".to_string(), path_string(&node)));
        }

        if let Some(code) = self.package_manager_exit {
            let log = tools_dir.path().join("pm.log");
            let body = format!(
                "echo \"$(pwd -P) $*\" >> '{}'\necho 'added 0 packages'\nexit {}",
                log.display(),
                code
            );
            let pm = write_script(tools_dir.path(), "pm", &body);
            env.push(("SPROUT_PACKAGE_MANAGER".to_string(), path_string(&pm)));
        }

        if self.fake_git {
            let git = write_script(tools_dir.path(), "git", "exit 0");
            env.push(("SPROUT_GIT".to_string(), path_string(&git)));
        }

        TestEnv {
            work_dir,
            home_dir,
            tools_dir,
            template: self.template,
            env,
        }
    }
}

fn path_string(path: &Path) -> String {
    path.to_string_lossy().to_string()
}

/// Write an executable `sh` script.
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    let path = dir.join(name);
    fs::write(&path, format!("#!/bin/sh\n{}\n", body)).expect("Failed to write script");

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to chmod script");
    }

    path
}
