//! # File I/O Module
//!
//! Writes generated artifacts atomically: the contents go to a uniquely
//! named temp file next to the destination, are synced, and the temp file is
//! renamed over the destination. `path` never holds a partial table and no
//! other file in the directory is touched.
//!
//! If `path` is a symlink the table is written to the file it points to,
//! the same as opening the path for writing would.
//!
//! ## Example
//!
//! ```rust,no_run
//! use math_core::file_io::write_atomic;
//! use std::path::Path;
//!
//! write_atomic(Path::new("sqrt_table.rs"), "static SQRT_TABLE: [f64; 0] = [\n];\n")?;
//! # Ok::<(), math_core::errors::MathError>(())
//! ```

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::Builder;
use tracing::debug;

use crate::errors::{MathError, MathResult};

/// Resolve the file that a write to `path` actually lands in.
///
/// Symlinks are followed, including a dangling final link (the write then
/// creates its target). Anything else is returned unchanged.
fn resolve_target(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return path.to_path_buf();
    }

    if let Ok(resolved) = fs::canonicalize(path) {
        return resolved;
    }

    // Dangling link: follow one level relative to the link's directory
    match fs::read_link(path) {
        Ok(link) if link.is_absolute() => link,
        Ok(link) => path.parent().unwrap_or_else(|| Path::new("")).join(link),
        Err(_) => path.to_path_buf(),
    }
}

/// Directory the temp file is created in (the destination's own directory).
fn parent_dir(target: &Path) -> &Path {
    match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    }
}

/// Write `contents` to `path`, fully replacing any previous file.
///
/// The write process:
/// 1. Resolve `path` through any symlink
/// 2. Create a uniquely named temp file in the destination directory
/// 3. Write the contents and sync to disk (fsync)
/// 4. Rename the temp file over the destination (atomic on most filesystems)
///
/// On failure the temp file is removed, so the destination is either
/// untouched or fully replaced.
///
/// # Returns
///
/// * `Ok(())` - `path` now holds exactly `contents`
/// * `Err(MathError::FileError)` - the temp file could not be created, written or renamed
pub fn write_atomic(path: &Path, contents: &str) -> MathResult<()> {
    let target = resolve_target(path);
    let file_name = target.file_name().ok_or_else(|| {
        MathError::file_error("open", path.display().to_string(), "path does not name a file")
    })?;

    let dir = parent_dir(&target);
    let prefix = format!(".{}.", file_name.to_string_lossy());
    let mut tmp_file = Builder::new()
        .prefix(&prefix)
        .suffix(".tmp")
        .tempfile_in(dir)
        .map_err(|e| IoContext::new("create temp file", &target).into_error(e))?;
    debug!(path = %path.display(), target = %target.display(), tmp = %tmp_file.path().display(), "writing artifact");

    tmp_file
        .write_all(contents.as_bytes())
        .map_err(|e| IoContext::new("write temp file", tmp_file.path()).into_error(e))?;

    // Sync to disk
    tmp_file
        .as_file()
        .sync_all()
        .map_err(|e| IoContext::new("sync temp file", tmp_file.path()).into_error(e))?;

    // Atomic rename; the temp file is deleted if this fails
    tmp_file
        .persist(&target)
        .map_err(|e| IoContext::new("rename to final", &target).into_error(e.error))?;

    debug!(target = %target.display(), bytes = contents.len(), "artifact written");
    Ok(())
}

/// Operation and path of a failed I/O call, turned into a `FileError`.
struct IoContext<'a> {
    operation: &'static str,
    path: &'a Path,
}

impl<'a> IoContext<'a> {
    fn new(operation: &'static str, path: &'a Path) -> Self {
        IoContext { operation, path }
    }

    fn into_error(self, e: std::io::Error) -> MathError {
        MathError::file_error(self.operation, self.path.display().to_string(), e.to_string())
    }
}
