//! Domain Ports (Interfaces)
//!
//! These traits define the boundaries of the domain layer.
//! Infrastructure layer provides concrete implementations.

pub mod command_runner;
pub mod scaffold_events;
pub mod template_source;

pub use command_runner::{CommandError, CommandOutput, CommandRunner, CommandSpec, OutputMode};
pub use scaffold_events::{NoopEventSink, ScaffoldEvent, ScaffoldEventSink, ScaffoldStep};
pub use template_source::TemplateSource;
