//! Scenario: First Project
//!
//! Journey: a developer runs `sprout demo` in an empty directory.
//!
//! Steps:
//! 1. Node.js 20 and git are installed
//! 2. `sprout demo` sparse-clones the starter template
//! 3. The template lands in `demo/`, named after the project
//! 4. Dependencies are installed inside `demo/`
//!
//! Success Criteria:
//! - Exit code 0 and a completion banner with next steps
//! - Only the template subdirectory is copied, hidden files included
//! - No temporary clone is left behind in the project

use std::fs;

use crate::common::*;

fn starter_env(pm_exit: i32) -> Option<TestEnv> {
    if !git_available() {
        eprintln!("skipping: git is not available");
        return None;
    }
    Some(
        TestEnv::builder()
            .node_version("v20.11.1")
            .package_manager_exit(pm_exit)
            .template(TemplateRepo::starter())
            .build(),
    )
}

/// SCENARIO: `sprout demo` from zero to an installed project
#[test]
fn scenario_first_project_complete_journey() {
    let Some(env) = starter_env(0) else { return };

    let result = env.run(&["demo"]);

    assert!(
        result.success,
        "sprout demo should succeed.\nstdout: {}\nstderr: {}",
        result.stdout, result.stderr
    );
    assert!(result.stdout.contains("Created demo at"));
    assert!(result.stdout.contains("cd demo"));
    assert!(result.stdout.contains("run dev"));

    // Template tree mirrored, including the dotfile and nested file
    let project = env.work_path("demo");
    assert!(project.join(".gitignore").is_file());
    assert!(project.join("src/handler.js").is_file());
    assert!(!project.join("other-template").exists());
    assert!(!project.join("README.md").exists());
    assert!(!project.join(".git").exists());
    assert!(!project.join("template-repo").exists());

    // Metadata renamed
    let package: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(project.join("package.json")).unwrap()).unwrap();
    assert_eq!(package["name"], "demo");
    assert_eq!(package["description"], "demo app description");
    assert_eq!(package["scripts"]["dev"], "serverless offline");

    let serverless = fs::read_to_string(project.join("serverless.yml")).unwrap();
    assert!(serverless.starts_with("service: demo\n"));
    assert!(serverless.contains("runtime: nodejs20.x"));

    // Install ran once, inside the project
    let log = env.package_manager_log();
    let canonical = project.canonicalize().unwrap();
    assert_eq!(
        log,
        vec![format!("{} install --silent", canonical.display())]
    );
}

/// SCENARIO: `--skip-install` leaves installation to the developer
#[test]
fn scenario_skip_install_mentions_install_step() {
    let Some(env) = starter_env(0) else { return };

    let result = env.run(&["api", "--skip-install"]);

    assert!(result.success, "stderr: {}", result.stderr);
    assert!(env.package_manager_log().is_empty());
    assert!(result.stdout.contains("install"));
    assert!(env.work_path("api/package.json").is_file());
}

/// SCENARIO: the install step fails after the project was created
#[test]
fn scenario_install_failure_exits_non_zero() {
    let Some(env) = starter_env(3) else { return };

    let result = env.run(&["demo"]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("exit code 3"),
        "stderr: {}",
        result.stderr
    );
    // Files were already copied and renamed before install ran
    assert!(env.work_path("demo/package.json").is_file());
}

/// SCENARIO: NDJSON output for automation
#[test]
fn scenario_json_event_stream() {
    let Some(env) = starter_env(0) else { return };

    let result = env.run(&["demo", "--json", "--skip-install"]);

    assert!(result.success, "stderr: {}", result.stderr);
    let events: Vec<serde_json::Value> = result
        .stdout
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();

    let steps: Vec<&str> = events
        .iter()
        .filter(|e| e["event"] == "step")
        .map(|e| e["step"].as_str().unwrap())
        .collect();
    assert_eq!(
        steps,
        vec![
            "check_runtime",
            "check_version_control",
            "create_directory",
            "fetch_template",
            "copy_template",
            "cleanup",
            "update_metadata",
        ]
    );

    let last = events.last().unwrap();
    assert_eq!(last["event"], "complete");
    assert_eq!(last["installed"], false);
}

/// SCENARIO: install output stays off the NDJSON stream
#[test]
fn scenario_json_event_stream_with_install() {
    let Some(env) = starter_env(0) else { return };

    let result = env.run(&["demo", "--json"]);

    assert!(result.success, "stderr: {}", result.stderr);
    for line in result.stdout.lines() {
        assert!(
            serde_json::from_str::<serde_json::Value>(line).is_ok(),
            "non-JSON line on stdout: {line}"
        );
    }
    assert!(result.stderr.contains("added 0 packages"));
    let last: serde_json::Value =
        serde_json::from_str(result.stdout.lines().last().unwrap()).unwrap();
    assert_eq!(last["installed"], true);
    assert_eq!(env.package_manager_log().len(), 1);
}

/// SCENARIO: a missing template subdirectory fails cleanly
#[test]
fn scenario_unknown_template_directory() {
    let Some(env) = starter_env(0) else { return };

    let result = env.run_with_env(&["demo"], &[("SPROUT_TEMPLATE_DIR", "no-such-template")]);

    assert_eq!(result.exit_code, 1);
    assert!(
        result.stderr.contains("failed to acquire template"),
        "stderr: {}",
        result.stderr
    );
    // The project directory was created before acquisition and stays empty
    let project = env.work_path("demo");
    assert!(fs::read_dir(project).unwrap().next().is_none());
}
