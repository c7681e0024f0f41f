//! Sprout - scaffold a new serverless Node.js project
//!
//! Sprout checks the host toolchain, sparse-clones a starter template into a
//! fresh directory, names the project in `package.json` and `serverless.yml`,
//! then installs dependencies.

pub mod application;
pub mod config;
pub mod domain;
pub mod error;
pub mod infrastructure;

// Re-exports for convenience
pub use application::{ScaffoldOptions, ScaffoldReport, Scaffolder};
pub use config::Config;
pub use domain::value_objects::{sanitize, ProjectName, SanitizedPath};
pub use error::{SproutError, SproutResult};
