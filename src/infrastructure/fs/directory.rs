//! Project directory creation, template copying and temp cleanup.

use std::fs;
use std::io;
use std::path::Path;

use ignore::WalkBuilder;
use tracing::{debug, trace};

use crate::error::{SproutError, SproutResult};

/// Create `path` (and parents) unless it already exists as an empty directory.
///
/// Existing non-empty directories, and existing non-directories, are refused.
/// The check and the creation are not atomic.
pub fn create_project_directory(path: &Path) -> SproutResult<()> {
    match fs::metadata(path) {
        Ok(meta) if meta.is_dir() => {
            if fs::read_dir(path)?.next().is_some() {
                return Err(SproutError::DirectoryNotEmpty {
                    path: path.to_path_buf(),
                });
            }
            debug!(path = %path.display(), "reusing empty directory");
            Ok(())
        }
        Ok(_) => Err(SproutError::DirectoryNotEmpty {
            path: path.to_path_buf(),
        }),
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "creating project directory");
            fs::create_dir_all(path)?;
            Ok(())
        }
        Err(e) => Err(e.into()),
    }
}

/// Mirror every file and directory under `src` into `dest`, dotfiles included.
///
/// Files are copied, never moved; `src` is left intact. Symbolic links are
/// skipped. Returns the number of files copied.
pub fn copy_tree(src: &Path, dest: &Path) -> SproutResult<usize> {
    let walker = WalkBuilder::new(src)
        .standard_filters(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    let mut copied = 0;
    for entry in walker {
        let entry = entry.map_err(walk_error)?;
        let Some(file_type) = entry.file_type() else {
            continue;
        };

        let relative = entry
            .path()
            .strip_prefix(src)
            .map_err(|e| io::Error::other(e.to_string()))?;
        let target = dest.join(relative);

        if file_type.is_dir() {
            fs::create_dir_all(&target)?;
        } else if file_type.is_file() {
            if let Some(parent) = target.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::copy(entry.path(), &target)?;
            trace!(file = %relative.display(), "copied");
            copied += 1;
        } else {
            trace!(path = %entry.path().display(), "skipping non-regular entry");
        }
    }

    debug!(files = copied, src = %src.display(), dest = %dest.display(), "template copied");
    Ok(copied)
}

/// Remove `path` recursively. A missing path is not an error.
pub fn cleanup_temp(path: &Path) -> SproutResult<()> {
    let meta = match fs::symlink_metadata(path) {
        Ok(meta) => meta,
        Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(()),
        Err(e) => return Err(e.into()),
    };

    let result = if meta.is_dir() {
        fs::remove_dir_all(path)
    } else {
        fs::remove_file(path)
    };

    match result {
        Ok(()) => {
            debug!(path = %path.display(), "removed temporary workspace");
            Ok(())
        }
        Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
        Err(e) => Err(e.into()),
    }
}

fn walk_error(err: ignore::Error) -> SproutError {
    let message = err.to_string();
    match err.into_io_error() {
        Some(io) => SproutError::Io(io),
        None => SproutError::Io(io::Error::other(message)),
    }
}
