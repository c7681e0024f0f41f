//! Scripted command runner for tests.

use std::cell::RefCell;
use std::collections::HashMap;

use crate::domain::ports::{CommandError, CommandOutput, CommandRunner, CommandSpec};

type Handler = Box<dyn Fn(&CommandSpec) -> Result<CommandOutput, CommandError>>;

/// Responds to commands keyed by `"<program> <first arg>"`.
///
/// Unscripted commands succeed with empty output. Every call is recorded.
#[derive(Default)]
pub struct MockCommandRunner {
    handlers: HashMap<String, Handler>,
    calls: RefCell<Vec<CommandSpec>>,
}

impl MockCommandRunner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(
        mut self,
        key: &str,
        handler: impl Fn(&CommandSpec) -> Result<CommandOutput, CommandError> + 'static,
    ) -> Self {
        self.handlers.insert(key.to_string(), Box::new(handler));
        self
    }

    pub fn succeed(self, key: &str, stdout: &str) -> Self {
        let stdout = stdout.to_string();
        self.respond(key, move |_| Ok(ok_output(&stdout)))
    }

    pub fn exit(self, key: &str, code: i32, stderr: &str) -> Self {
        let stderr = stderr.to_string();
        self.respond(key, move |_| {
            Ok(CommandOutput {
                success: false,
                code: Some(code),
                stdout: String::new(),
                stderr: stderr.clone(),
            })
        })
    }

    pub fn fail_spawn(self, key: &str) -> Self {
        self.respond(key, |spec| {
            Err(CommandError::Spawn {
                program: spec.program.clone(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            })
        })
    }

    pub fn calls(&self) -> Vec<CommandSpec> {
        self.calls.borrow().clone()
    }

    /// Command lines of all recorded calls.
    pub fn command_lines(&self) -> Vec<String> {
        self.calls.borrow().iter().map(|c| c.display()).collect()
    }
}

pub fn ok_output(stdout: &str) -> CommandOutput {
    CommandOutput {
        success: true,
        code: Some(0),
        stdout: stdout.to_string(),
        stderr: String::new(),
    }
}

fn key_of(spec: &CommandSpec) -> String {
    match spec.args.first() {
        Some(first) => format!("{} {}", spec.program, first.to_string_lossy()),
        None => spec.program.clone(),
    }
}

impl CommandRunner for MockCommandRunner {
    fn run(&self, spec: &CommandSpec) -> Result<CommandOutput, CommandError> {
        self.calls.borrow_mut().push(spec.clone());
        match self.handlers.get(&key_of(spec)) {
            Some(handler) => handler(spec),
            None => Ok(ok_output("")),
        }
    }
}
