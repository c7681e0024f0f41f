//! Project metadata rewriting
//!
//! After the template is copied, two files carry the starter's name:
//! `package.json` (`name`, `description`) and `serverless.yml` (`service:`).
//! Both are optional; a missing file is skipped.

use std::fs;
use std::io;
use std::path::Path;
use std::sync::OnceLock;

use regex::{NoExpand, Regex};
use tracing::debug;

use super::fs::atomic_write;
use crate::domain::value_objects::ProjectName;
use crate::error::{SproutError, SproutResult};

pub const PACKAGE_DESCRIPTOR: &str = "package.json";
pub const SERVICE_DECLARATION: &str = "serverless.yml";

fn service_line() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    // CRLF mode keeps a trailing `\r` out of the match.
    RE.get_or_init(|| Regex::new(r"(?mR)^service:.*$").expect("static regex"))
}

/// Set `name` and `description` in `package.json`.
///
/// Returns `Ok(false)` when the file does not exist. Invalid JSON is
/// reported, not repaired.
pub fn update_package_descriptor(project_path: &Path, name: &ProjectName) -> SproutResult<bool> {
    let path = project_path.join(PACKAGE_DESCRIPTOR);
    let Some(content) = read_optional(&path)? else {
        debug!(path = %path.display(), "no package descriptor, skipping");
        return Ok(false);
    };

    let mut doc: serde_json::Value = serde_json::from_str(&content)?;
    let fields = doc
        .as_object_mut()
        .ok_or_else(|| SproutError::MalformedDescriptor { path: path.clone() })?;
    fields.insert(
        "name".to_string(),
        serde_json::Value::String(name.as_str().to_string()),
    );
    fields.insert(
        "description".to_string(),
        serde_json::Value::String(name.description()),
    );

    let mut rendered = serde_json::to_string_pretty(&doc)?;
    rendered.push('\n');
    atomic_write(&path, rendered.as_bytes())?;
    debug!(path = %path.display(), "package descriptor updated");
    Ok(true)
}

/// Replace the first `service:` line in `serverless.yml`.
///
/// Returns whether a line was replaced. All other bytes are left as they were.
pub fn update_service_declaration(project_path: &Path, name: &ProjectName) -> SproutResult<bool> {
    let path = project_path.join(SERVICE_DECLARATION);
    let Some(content) = read_optional(&path)? else {
        debug!(path = %path.display(), "no service declaration, skipping");
        return Ok(false);
    };

    if !service_line().is_match(&content) {
        debug!(path = %path.display(), "no service line found");
        return Ok(false);
    }

    let replacement = format!("service: {}", name.as_str());
    let updated = service_line().replace(&content, NoExpand(&replacement));
    atomic_write(&path, updated.as_bytes())?;
    debug!(path = %path.display(), "service declaration updated");
    Ok(true)
}

fn read_optional(path: &Path) -> SproutResult<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e.into()),
    }
}
