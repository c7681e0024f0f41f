//! Domain Layer
//!
//! Value types and the ports the scaffolding use case depends on.
//!
//! ## Structure
//!
//! - `value_objects/` - Immutable value types (ProjectName, SanitizedPath)
//! - `ports/` - Interface definitions for infrastructure (commands, templates, events)

pub mod ports;
pub mod value_objects;
