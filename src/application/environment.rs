//! Host prerequisite checks
//!
//! Both checks shell out through the [`CommandRunner`] port with an argument
//! vector, so the tool name is never interpreted by a shell.

use tracing::debug;

use crate::domain::ports::{CommandRunner, CommandSpec, OutputMode};
use crate::error::{SproutError, SproutResult};

/// Oldest Node.js major version the generated project supports.
pub const DEFAULT_MIN_NODE_MAJOR: u32 = 20;

/// Parse the major component of a version string such as `v20.11.1`.
pub fn parse_major_version(raw: &str) -> Option<u32> {
    let trimmed = raw.trim();
    let version = trimmed.strip_prefix('v').unwrap_or(trimmed);
    version.split('.').next()?.parse().ok()
}

/// Ensure `<node> --version` reports at least `min_major`.
///
/// Returns the detected major version.
pub fn check_runtime_version(
    runner: &dyn CommandRunner,
    node: &str,
    min_major: u32,
) -> SproutResult<u32> {
    let spec = CommandSpec::new(node)
        .arg("--version")
        .output(OutputMode::Capture);
    let output = runner.run(&spec).map_err(|e| {
        debug!(error = %e, "runtime probe failed");
        SproutError::MissingDependency {
            tool: node.to_string(),
        }
    })?;
    if !output.success {
        return Err(SproutError::MissingDependency {
            tool: node.to_string(),
        });
    }

    let raw = output.stdout.trim();
    let found = raw.strip_prefix('v').unwrap_or(raw).to_string();
    let major = parse_major_version(raw).ok_or_else(|| SproutError::UnsupportedRuntime {
        required: min_major,
        found: found.clone(),
    })?;

    if major < min_major {
        return Err(SproutError::UnsupportedRuntime {
            required: min_major,
            found,
        });
    }

    debug!(major, min_major, "runtime version ok");
    Ok(major)
}

/// Ensure `<tool> --version` can be run and exits successfully.
pub fn check_tool_installed(runner: &dyn CommandRunner, tool: &str) -> SproutResult<()> {
    let spec = CommandSpec::new(tool)
        .arg("--version")
        .output(OutputMode::Quiet);
    match runner.run(&spec) {
        Ok(output) if output.success => {
            debug!(tool, "tool available");
            Ok(())
        }
        Ok(_) | Err(_) => Err(SproutError::MissingDependency {
            tool: tool.to_string(),
        }),
    }
}
