//! Domain Value Objects
//!
//! Immutable value types that represent domain concepts.

mod project_name;
mod sanitized_path;

pub use project_name::ProjectName;
pub use sanitized_path::{sanitize, sanitize_in, SanitizedPath, FORBIDDEN_CHARS};
