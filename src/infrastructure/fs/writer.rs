//! Atomic file writer
//!
//! Writes go to a temp file in the target's directory and are renamed into
//! place, so a crash never leaves a half-written metadata file behind.

use std::io::Write;
use std::path::Path;

use crate::error::SproutResult;

/// Write content to a file atomically (tempfile + rename).
pub fn atomic_write(path: &Path, content: &[u8]) -> SproutResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
