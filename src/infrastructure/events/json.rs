//! JSON Event Sink
//!
//! Outputs scaffold events as NDJSON for CI/automation consumption.

use crate::domain::ports::{ScaffoldEvent, ScaffoldEventSink};
use std::io::{self, Write};
use std::sync::Mutex;

/// Event sink that outputs NDJSON events to stdout
pub struct JsonEventSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl JsonEventSink {
    /// Create a new JSON event sink writing to stdout
    pub fn stdout() -> Self {
        Self {
            writer: Mutex::new(Box::new(io::stdout())),
        }
    }

    /// Create a JSON event sink writing to a custom writer (for testing)
    #[allow(dead_code)]
    pub fn with_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }

    fn write_event(&self, event: serde_json::Value) {
        if let Ok(mut writer) = self.writer.lock() {
            let _ = writeln!(writer, "{}", event);
            let _ = writer.flush();
        }
    }
}

impl ScaffoldEventSink for JsonEventSink {
    fn on_event(&self, event: ScaffoldEvent) {
        let json = match event {
            ScaffoldEvent::Step { step, message } => serde_json::json!({
                "event": "step",
                "step": step.id(),
                "message": message,
            }),
            ScaffoldEvent::Copied { files } => serde_json::json!({
                "event": "copied",
                "files": files,
            }),
            ScaffoldEvent::Warning { message } => serde_json::json!({
                "event": "warning",
                "message": message,
            }),
            // Nothing to release: NDJSON output never owns the terminal.
            ScaffoldEvent::HandOff => return,
            ScaffoldEvent::Completed {
                project_path,
                installed,
            } => serde_json::json!({
                "event": "complete",
                "path": project_path.display().to_string(),
                "installed": installed,
            }),
        };
        self.write_event(json);
    }
}
