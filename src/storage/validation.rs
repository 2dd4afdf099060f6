//! Path validation
//!
//! Confines caller-supplied paths to the workspace root.

use log::warn;
use std::io;
use std::path::{Path, PathBuf, is_separator};

use crate::error::StorageError;
use crate::storage::filesystem::{
    canonicalize_lenient, create_directory, directory_exists, find_symlink,
};

/// The directory every operation is confined to.
///
/// Holds the canonical form of the configured directory. It is fixed for the
/// lifetime of the process and safe to share between concurrent requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkspaceRoot {
    root: PathBuf,
}

/// A caller path that has been resolved and proven to lie inside the workspace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfinedPath {
    real: PathBuf,
    requested: String,
}

impl WorkspaceRoot {
    /// Creates the directory if needed and pins its canonical location.
    pub fn open(dir: impl AsRef<Path>) -> io::Result<Self> {
        let dir = dir.as_ref();
        create_directory(dir)?;
        let root = canonicalize_lenient(dir)?;
        if !directory_exists(&root) {
            return Err(io::Error::new(
                io::ErrorKind::NotADirectory,
                format!("{} is not a directory", root.display()),
            ));
        }
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Resolves `raw` against the workspace.
    ///
    /// Leading separators are stripped so absolute-looking paths stay
    /// workspace-relative. The result is canonical and is either the root
    /// itself or a descendant of it; anything else is `AccessDenied`.
    pub fn resolve(&self, raw: &str) -> Result<ConfinedPath, StorageError> {
        let relative = raw.trim_start_matches(is_separator);
        let candidate = self.root.join(relative);

        let real = canonicalize_lenient(&candidate).map_err(|e| {
            warn!("Could not canonicalize {:?}: {}", raw, e);
            StorageError::AccessDenied(raw.to_string())
        })?;

        // Component-wise: `/workspace-evil` is not under `/workspace`.
        if !real.starts_with(&self.root) {
            warn!(
                "Rejected path {:?} resolving to {} outside {}",
                raw,
                real.display(),
                self.root.display()
            );
            return Err(StorageError::AccessDenied(raw.to_string()));
        }

        match find_symlink(&self.root, &real) {
            Ok(None) => {}
            Ok(Some(link)) => {
                warn!("Rejected path {:?} through dangling symlink {}", raw, link.display());
                return Err(StorageError::AccessDenied(raw.to_string()));
            }
            Err(e) => {
                warn!("Could not inspect {:?}: {}", raw, e);
                return Err(StorageError::AccessDenied(raw.to_string()));
            }
        }

        Ok(ConfinedPath {
            real,
            requested: raw.to_string(),
        })
    }
}

impl ConfinedPath {
    pub fn as_path(&self) -> &Path {
        &self.real
    }

    /// The path string as the caller sent it.
    pub fn requested(&self) -> &str {
        &self.requested
    }
}

impl AsRef<Path> for ConfinedPath {
    fn as_ref(&self) -> &Path {
        &self.real
    }
}

/// Expresses `path` relative to the workspace using `/` separators.
pub fn relative_to_root(root: &WorkspaceRoot, path: &Path) -> String {
    let relative = path.strip_prefix(&root.root).unwrap_or(path);
    relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("/")
}
