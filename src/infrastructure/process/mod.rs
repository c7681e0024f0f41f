//! Subprocess execution
//!
//! Implements the [`CommandRunner`] port with `std::process::Command`.
//! Programs always receive an argument vector; no shell is involved.

#[cfg(test)]
pub mod mock;

use std::io::{self, Read};
use std::process::{Child, Command, ExitStatus, Stdio};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use tracing::debug;

use crate::domain::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec, OutputMode};

const POLL_INTERVAL: Duration = Duration::from_millis(50);

/// Runs commands on the host.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemCommandRunner;

impl SystemCommandRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        let command_line = spec.display();
        debug!(command = %command_line, cwd = ?spec.cwd, "running command");

        let mut cmd = Command::new(&spec.program);
        cmd.args(&spec.args);
        if let Some(cwd) = &spec.cwd {
            cmd.current_dir(cwd);
        }
        for (key, value) in &spec.env {
            cmd.env(key, value);
        }

        match spec.output {
            OutputMode::Quiet => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::null())
                    .stderr(Stdio::null());
            }
            OutputMode::Capture => {
                cmd.stdin(Stdio::null())
                    .stdout(Stdio::piped())
                    .stderr(Stdio::piped());
            }
            OutputMode::Inherit => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::inherit())
                    .stderr(Stdio::inherit());
            }
            OutputMode::InheritToStderr => {
                cmd.stdin(Stdio::inherit())
                    .stdout(Stdio::from(io::stderr()))
                    .stderr(Stdio::inherit());
            }
        }

        let mut child = cmd.spawn().map_err(|source| CommandError::Spawn {
            program: spec.program.clone(),
            source,
        })?;

        // Drain pipes on helper threads so a chatty child can't fill the
        // pipe buffer and stall while we wait on it.
        let stdout = child.stdout.take().map(drain);
        let stderr = child.stderr.take().map(drain);

        let status = match spec.timeout {
            Some(timeout) => wait_with_timeout(&mut child, timeout, &command_line)?,
            None => child.wait().map_err(|source| CommandError::Io {
                command: command_line.clone(),
                source,
            })?,
        };

        let output = CommandOutput {
            success: status.success(),
            code: status.code(),
            stdout: collect(stdout),
            stderr: collect(stderr),
        };
        debug!(command = %command_line, code = ?output.code, "command finished");
        Ok(output)
    }
}

fn drain<R: Read + Send + 'static>(mut pipe: R) -> JoinHandle<Vec<u8>> {
    thread::spawn(move || {
        let mut buf = Vec::new();
        let _ = pipe.read_to_end(&mut buf);
        buf
    })
}

fn collect(handle: Option<JoinHandle<Vec<u8>>>) -> String {
    handle
        .and_then(|h| h.join().ok())
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
        .unwrap_or_default()
}

fn wait_with_timeout(
    child: &mut Child,
    timeout: Duration,
    command_line: &str,
) -> Result<ExitStatus, CommandError> {
    let started = Instant::now();
    loop {
        let polled = child.try_wait().map_err(|source| CommandError::Io {
            command: command_line.to_string(),
            source,
        })?;
        if let Some(status) = polled {
            return Ok(status);
        }

        if started.elapsed() >= timeout {
            let _ = child.kill();
            let _ = child.wait();
            return Err(CommandError::TimedOut {
                command: command_line.to_string(),
                timeout,
            });
        }

        thread::sleep(POLL_INTERVAL);
    }
}
