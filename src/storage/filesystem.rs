//! File system helpers
//!
//! Path normalization and existence checks shared by validation and operations.

use soft_canonicalize::soft_canonicalize;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Canonicalize a path that may not fully exist.
///
/// Existing components are resolved by the OS with symlinks followed; the
/// non-existent remainder is normalized without touching the disk.
pub fn canonicalize_lenient(path: &Path) -> io::Result<PathBuf> {
    soft_canonicalize(path)
}

/// Finds a symlink left in an already-canonical path below `root`.
///
/// Canonicalization only leaves one behind when it is dangling, and writing
/// through it would create its target wherever that points.
pub fn find_symlink(root: &Path, path: &Path) -> io::Result<Option<PathBuf>> {
    for ancestor in path.ancestors().take_while(|a| *a != root) {
        match fs::symlink_metadata(ancestor) {
            Ok(m) if m.file_type().is_symlink() => return Ok(Some(ancestor.to_path_buf())),
            Ok(_) => {}
            Err(e)
                if matches!(
                    e.kind(),
                    io::ErrorKind::NotFound | io::ErrorKind::NotADirectory
                ) => {}
            Err(e) => return Err(e),
        }
    }
    Ok(None)
}

/// Create a directory and any missing ancestors; succeeds if it already exists.
pub fn create_directory(path: &Path) -> io::Result<()> {
    fs::create_dir_all(path)
}

/// Create the missing ancestors of `path`, leaving `path` itself alone.
pub fn ensure_parent(path: &Path) -> io::Result<()> {
    match path.parent() {
        Some(parent) => create_directory(parent),
        None => Ok(()),
    }
}

/// Check if directory exists
pub fn directory_exists(path: &Path) -> bool {
    path.is_dir()
}
