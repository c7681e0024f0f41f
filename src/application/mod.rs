//! Application Layer
//!
//! Use cases that orchestrate domain ports and infrastructure.

pub mod environment;
pub mod scaffold;

pub use environment::{
    check_runtime_version, check_tool_installed, parse_major_version, DEFAULT_MIN_NODE_MAJOR,
};
pub use scaffold::{ScaffoldOptions, ScaffoldReport, Scaffolder};
