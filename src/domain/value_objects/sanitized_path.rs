//! Sanitized Path Value Object
//!
//! Every path that ends up on a subprocess command line (clone destinations,
//! temporary workspaces, working directories) goes through [`SanitizedPath`]:
//! - Non-empty after trimming whitespace
//! - Never starts with `-` (would be parsed as a flag)
//! - Contains none of `` ` $ | ; & < > `` or NUL
//! - Absolute and lexically normalized (`.` and `..` collapsed)

use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::error::{SproutError, SproutResult};

/// Characters that are rejected outright.
pub const FORBIDDEN_CHARS: &[char] = &['`', '$', '|', ';', '&', '<', '>', '\0'];

/// A validated, absolute, normalized path
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SanitizedPath(PathBuf);

impl SanitizedPath {
    /// Sanitize `input`, resolving relative paths against the current directory.
    pub fn new(input: &str) -> SproutResult<Self> {
        let trimmed = validate(input)?;
        let base = std::env::current_dir()?;
        Ok(Self(resolve(Path::new(trimmed), &base)))
    }

    /// Sanitize `input`, resolving relative paths against `base`.
    ///
    /// `base` is trusted and is expected to be absolute.
    pub fn new_in(input: &str, base: &Path) -> SproutResult<Self> {
        let trimmed = validate(input)?;
        Ok(Self(resolve(Path::new(trimmed), base)))
    }

    /// Sanitize a path value (lossy for non UTF-8 paths).
    pub fn from_path(path: &Path) -> SproutResult<Self> {
        Self::new(&path.to_string_lossy())
    }

    pub fn as_path(&self) -> &Path {
        &self.0
    }

    /// Append a child component and sanitize the result again.
    pub fn join(&self, child: &str) -> SproutResult<Self> {
        Self::new_in(child, &self.0)
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.0
    }
}

impl AsRef<Path> for SanitizedPath {
    fn as_ref(&self) -> &Path {
        &self.0
    }
}

impl AsRef<std::ffi::OsStr> for SanitizedPath {
    fn as_ref(&self) -> &std::ffi::OsStr {
        self.0.as_os_str()
    }
}

impl fmt::Display for SanitizedPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.display())
    }
}

/// Sanitize a path relative to the current directory.
pub fn sanitize(input: &str) -> SproutResult<SanitizedPath> {
    SanitizedPath::new(input)
}

/// Sanitize a path relative to an explicit base directory.
pub fn sanitize_in(input: &str, base: &Path) -> SproutResult<SanitizedPath> {
    SanitizedPath::new_in(input, base)
}

fn validate(input: &str) -> SproutResult<&str> {
    let trimmed = input.trim();

    if trimmed.is_empty() {
        return Err(SproutError::invalid_path(input, "path is empty"));
    }

    if trimmed.starts_with('-') {
        return Err(SproutError::invalid_path(
            input,
            "path must not start with '-'",
        ));
    }

    if let Some(c) = trimmed.chars().find(|c| FORBIDDEN_CHARS.contains(c)) {
        let shown = if c == '\0' {
            "NUL".to_string()
        } else {
            format!("'{}'", c)
        };
        return Err(SproutError::invalid_path(
            input,
            format!("path contains forbidden character {}", shown),
        ));
    }

    Ok(trimmed)
}

/// Lexical normalization: no filesystem access, symlinks are not resolved.
fn resolve(path: &Path, base: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    };

    let mut out = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => out.push(component.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                // `..` at the root stays at the root
                let at_root = matches!(
                    out.components().next_back(),
                    None | Some(Component::RootDir) | Some(Component::Prefix(_))
                );
                if !at_root {
                    out.pop();
                }
            }
            Component::Normal(part) => out.push(part),
        }
    }
    out
}
