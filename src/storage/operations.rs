//! Storage operations
//!
//! Implements the six workspace file operations. Each one resolves its path
//! arguments through the workspace root before touching the filesystem, so a
//! rejected path never causes a side effect.

use log::{error, info};
use std::fs;
use std::io;
use std::sync::Arc;

use crate::error::StorageError;
use crate::storage::filesystem::{create_directory, ensure_parent};
use crate::storage::permissions::{created_time, modified_time, permission_bits};
use crate::storage::results::{
    CreateDirectoryResult, DirectoryEntry, EntryKind, FileInfo, ListResult, MoveResult, ReadResult,
    WriteResult,
};
use crate::storage::validation::{ConfinedPath, WorkspaceRoot, relative_to_root};

/// File operations confined to a single workspace root.
///
/// Holds no per-request state; clones share the same root.
#[derive(Debug, Clone)]
pub struct FileOperations {
    root: Arc<WorkspaceRoot>,
}

impl FileOperations {
    pub fn new(root: Arc<WorkspaceRoot>) -> Self {
        Self { root }
    }

    /// Reads a whole file as UTF-8 text.
    ///
    /// Only regular files are read; directories, FIFOs and sockets are `NotAFile`.
    pub fn read_file(&self, path: &str) -> Result<ReadResult, StorageError> {
        let target = self.root.resolve(path)?;
        let metadata = stat_existing(&target)?;
        if !metadata.is_file() {
            return Err(StorageError::NotAFile(path.to_string()));
        }

        let bytes = fs::read(&target).map_err(|e| {
            error!("Failed to read {} (real: {}): {}", path, target.as_path().display(), e);
            StorageError::io("Error reading file", path)(e)
        })?;
        let content = String::from_utf8(bytes).map_err(|source| StorageError::Decode {
            path: path.to_string(),
            source,
        })?;

        info!("Read file {} ({} bytes)", path, content.len());
        Ok(ReadResult {
            content,
            path: path.to_string(),
        })
    }

    /// Creates missing ancestors, then creates or truncates the file with `content`.
    pub fn write_file(&self, path: &str, content: &str) -> Result<WriteResult, StorageError> {
        let target = self.root.resolve(path)?;

        ensure_parent(target.as_path())
            .and_then(|_| fs::write(&target, content.as_bytes()))
            .map_err(|e| {
                error!("Failed to write {} (real: {}): {}", path, target.as_path().display(), e);
                StorageError::io("Error writing file", path)(e)
            })?;

        info!("Wrote file {} ({} bytes)", path, content.len());
        Ok(WriteResult {
            path: path.to_string(),
            size: content.len() as u64,
        })
    }

    /// Creates a directory with its ancestors. An existing directory is not an error.
    pub fn create_directory(&self, path: &str) -> Result<CreateDirectoryResult, StorageError> {
        let target = self.root.resolve(path)?;

        match fs::metadata(&target) {
            Ok(metadata) if metadata.is_dir() => {
                info!("Directory {} already exists", path);
                return Ok(CreateDirectoryResult {
                    path: path.to_string(),
                    created: false,
                });
            }
            Ok(_) => return Err(StorageError::NotADirectory(path.to_string())),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => return Err(StorageError::io("Error creating directory", path)(e)),
        }

        create_directory(target.as_path()).map_err(|e| {
            error!(
                "Failed to create directory {} (real: {}): {}",
                path,
                target.as_path().display(),
                e
            );
            StorageError::io("Error creating directory", path)(e)
        })?;

        info!("Created directory {}", path);
        Ok(CreateDirectoryResult {
            path: path.to_string(),
            created: true,
        })
    }

    /// Lists the immediate children of a directory, sorted by name.
    pub fn list_directory(&self, path: &str) -> Result<ListResult, StorageError> {
        let target = self.root.resolve(path)?;
        let metadata = stat_existing(&target)?;
        if !metadata.is_dir() {
            return Err(StorageError::NotADirectory(path.to_string()));
        }

        let entries = fs::read_dir(&target).map_err(|e| {
            error!(
                "Failed to list directory {} (real: {}): {}",
                path,
                target.as_path().display(),
                e
            );
            StorageError::io("Error listing directory", path)(e)
        })?;

        let mut items = Vec::new();
        for entry in entries {
            let entry = entry.map_err(StorageError::io("Error listing directory", path))?;
            let child = entry.path();

            // Follows symlinks; a dangling link is reported as a file without a size.
            let (kind, size) = match fs::metadata(&child) {
                Ok(m) if m.is_dir() => (EntryKind::Directory, None),
                Ok(m) if m.is_file() => (EntryKind::File, Some(m.len())),
                _ => (EntryKind::File, None),
            };

            items.push(DirectoryEntry {
                name: entry.file_name().to_string_lossy().into_owned(),
                kind,
                size,
                path: relative_to_root(&self.root, &child),
            });
        }
        items.sort_by(|a, b| a.name.cmp(&b.name));

        info!("Listed directory {} - {} entries", path, items.len());
        Ok(ListResult {
            path: path.to_string(),
            items,
        })
    }

    /// Moves or renames a file or directory. Never overwrites the destination.
    pub fn move_file(&self, source: &str, destination: &str) -> Result<MoveResult, StorageError> {
        let from = self.root.resolve(source)?;
        let to = self.root.resolve(destination)?;

        if !exists(&from, source)? {
            return Err(StorageError::NotFound(source.to_string()));
        }
        if exists(&to, destination)? {
            return Err(StorageError::AlreadyExists(destination.to_string()));
        }

        ensure_parent(to.as_path())
            .and_then(|_| fs::rename(&from, &to))
            .map_err(|e| {
                error!(
                    "Failed to move {} to {} (real: {} -> {}): {}",
                    source,
                    destination,
                    from.as_path().display(),
                    to.as_path().display(),
                    e
                );
                StorageError::io("Error moving file", source)(e)
            })?;

        info!("Moved {} to {}", source, destination);
        Ok(MoveResult {
            source_path: source.to_string(),
            destination_path: destination.to_string(),
        })
    }

    /// Reports metadata for a file or directory.
    pub fn get_file_info(&self, path: &str) -> Result<FileInfo, StorageError> {
        let target = self.root.resolve(path)?;
        let metadata = stat_existing(&target)?;

        let name = target
            .as_path()
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let kind = if metadata.is_dir() {
            EntryKind::Directory
        } else {
            EntryKind::File
        };

        info!("Retrieved info for {}", path);
        Ok(FileInfo {
            path: path.to_string(),
            name,
            kind,
            size: metadata.len(),
            modified_time: modified_time(&metadata),
            created_time: created_time(&metadata),
            permissions: permission_bits(&metadata),
        })
    }
}

/// Stats a confined path, mapping absence to `NotFound`.
fn stat_existing(target: &ConfinedPath) -> Result<fs::Metadata, StorageError> {
    let raw = target.requested();
    fs::metadata(target).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound | io::ErrorKind::NotADirectory => {
            StorageError::NotFound(raw.to_string())
        }
        _ => StorageError::io("Error accessing", raw)(e),
    })
}

fn exists(target: &ConfinedPath, raw: &str) -> Result<bool, StorageError> {
    target
        .as_path()
        .try_exists()
        .map_err(StorageError::io("Error accessing", raw))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn engine() -> (TempDir, FileOperations) {
        let tmp = TempDir::new().unwrap();
        let root = WorkspaceRoot::open(tmp.path()).unwrap();
        (tmp, FileOperations::new(Arc::new(root)))
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let (_tmp, ops) = engine();
        let content = "Hello, Filesystem Sandbox!\nThis is a demo file.\n";

        let written = ops.write_file("demo/hello.txt", content).unwrap();
        assert_eq!(written.size, content.len() as u64);

        let read = ops.read_file("demo/hello.txt").unwrap();
        assert_eq!(read.content, content);
        assert_eq!(read.path, "demo/hello.txt");
    }

    #[test]
    fn test_write_creates_missing_ancestors() {
        let (tmp, ops) = engine();
        ops.write_file("/a/b/c/d.txt", "deep").unwrap();
        assert!(tmp.path().join("a/b/c").is_dir());
        assert_eq!(fs::read_to_string(tmp.path().join("a/b/c/d.txt")).unwrap(), "deep");
    }

    #[test]
    fn test_write_reports_byte_length() {
        let (_tmp, ops) = engine();
        let written = ops.write_file("u.txt", "héllo").unwrap();
        assert_eq!(written.size, 6);
    }

    #[test]
    fn test_write_overwrites_existing_file() {
        let (_tmp, ops) = engine();
        ops.write_file("f.txt", "first version").unwrap();
        ops.write_file("f.txt", "v2").unwrap();
        assert_eq!(ops.read_file("f.txt").unwrap().content, "v2");
    }

    #[test]
    fn test_write_outside_workspace_has_no_side_effects() {
        let (tmp, ops) = engine();
        let err = ops.write_file("newdir/../../escape.txt", "x").unwrap_err();
        assert!(matches!(err, StorageError::AccessDenied(_)));
        assert!(!tmp.path().join("newdir").exists());
        assert!(!tmp.path().parent().unwrap().join("escape.txt").exists());
    }

    #[test]
    fn test_read_missing_file() {
        let (_tmp, ops) = engine();
        assert!(matches!(
            ops.read_file("nope.txt"),
            Err(StorageError::NotFound(p)) if p == "nope.txt"
        ));
    }

    #[test]
    fn test_read_directory_is_not_a_file() {
        let (_tmp, ops) = engine();
        ops.create_directory("dir").unwrap();
        assert!(matches!(ops.read_file("dir"), Err(StorageError::NotAFile(_))));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_socket_is_not_a_file() {
        let (tmp, ops) = engine();
        let _listener = std::os::unix::net::UnixListener::bind(tmp.path().join("sock")).unwrap();

        assert!(matches!(
            ops.read_file("sock"),
            Err(StorageError::NotAFile(p)) if p == "sock"
        ));
    }

    #[test]
    fn test_read_invalid_utf8_is_decode_error() {
        let (tmp, ops) = engine();
        fs::write(tmp.path().join("bin.dat"), [0xff, 0xfe, 0x00]).unwrap();
        let err = ops.read_file("bin.dat").unwrap_err();
        assert_eq!(err.kind(), crate::error::ErrorKind::DecodeError);
    }

    #[test]
    fn test_create_directory_is_idempotent() {
        let (tmp, ops) = engine();
        let first = ops.create_directory("x/y").unwrap();
        assert!(first.created);
        assert!(tmp.path().join("x/y").is_dir());

        let second = ops.create_directory("x/y").unwrap();
        assert!(!second.created);
        assert_eq!(second.path, "x/y");
    }

    #[test]
    fn test_create_directory_over_file_fails() {
        let (_tmp, ops) = engine();
        ops.write_file("f.txt", "x").unwrap();
        assert!(matches!(
            ops.create_directory("f.txt"),
            Err(StorageError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_list_directory_reports_kinds_and_sizes() {
        let (_tmp, ops) = engine();
        ops.write_file("a/b.txt", "hi").unwrap();
        ops.create_directory("a/sub").unwrap();

        let listing = ops.list_directory("a").unwrap();
        assert_eq!(listing.path, "a");
        assert_eq!(
            listing.items,
            vec![
                DirectoryEntry {
                    name: "b.txt".into(),
                    kind: EntryKind::File,
                    size: Some(2),
                    path: "a/b.txt".into(),
                },
                DirectoryEntry {
                    name: "sub".into(),
                    kind: EntryKind::Directory,
                    size: None,
                    path: "a/sub".into(),
                },
            ]
        );
    }

    #[test]
    fn test_list_root_and_errors() {
        let (_tmp, ops) = engine();
        ops.write_file("top.txt", "t").unwrap();
        let listing = ops.list_directory("/").unwrap();
        assert_eq!(listing.items.len(), 1);
        assert_eq!(listing.items[0].path, "top.txt");

        assert!(matches!(ops.list_directory("missing"), Err(StorageError::NotFound(_))));
        assert!(matches!(
            ops.list_directory("top.txt"),
            Err(StorageError::NotADirectory(_))
        ));
    }

    #[test]
    fn test_move_renames_and_creates_parents() {
        let (tmp, ops) = engine();
        ops.write_file("demo/config.json", "{}").unwrap();

        let moved = ops.move_file("demo/config.json", "archive/settings.json").unwrap();
        assert_eq!(moved.source_path, "demo/config.json");
        assert_eq!(moved.destination_path, "archive/settings.json");
        assert!(!tmp.path().join("demo/config.json").exists());
        assert_eq!(ops.read_file("archive/settings.json").unwrap().content, "{}");
    }

    #[test]
    fn test_move_never_overwrites() {
        let (_tmp, ops) = engine();
        ops.write_file("src.txt", "source").unwrap();
        ops.write_file("dst.txt", "destination").unwrap();

        assert!(matches!(
            ops.move_file("src.txt", "dst.txt"),
            Err(StorageError::AlreadyExists(p)) if p == "dst.txt"
        ));
        assert_eq!(ops.read_file("src.txt").unwrap().content, "source");
        assert_eq!(ops.read_file("dst.txt").unwrap().content, "destination");
    }

    #[test]
    fn test_move_missing_source() {
        let (_tmp, ops) = engine();
        assert!(matches!(
            ops.move_file("ghost.txt", "other.txt"),
            Err(StorageError::NotFound(p)) if p == "ghost.txt"
        ));
    }

    #[test]
    fn test_move_checks_both_paths_before_acting() {
        let (_tmp, ops) = engine();
        ops.write_file("keep.txt", "k").unwrap();
        assert!(matches!(
            ops.move_file("keep.txt", "../../stolen.txt"),
            Err(StorageError::AccessDenied(_))
        ));
        assert_eq!(ops.read_file("keep.txt").unwrap().content, "k");
    }

    #[test]
    fn test_file_info_for_file_and_directory() {
        let (tmp, ops) = engine();
        ops.write_file("demo/hello.txt", "hello").unwrap();

        let info = ops.get_file_info("demo/hello.txt").unwrap();
        assert_eq!(info.name, "hello.txt");
        assert_eq!(info.kind, EntryKind::File);
        assert_eq!(info.size, 5);
        assert_eq!(info.permissions.len(), 3);
        assert!(info.permissions.chars().all(|c| ('0'..='7').contains(&c)));

        let dir = ops.get_file_info("demo").unwrap();
        assert_eq!(dir.kind, EntryKind::Directory);

        let root = ops.get_file_info("").unwrap();
        let root_name = tmp.path().canonicalize().unwrap();
        assert_eq!(
            root.name,
            root_name.file_name().unwrap().to_string_lossy().into_owned()
        );
    }

    #[test]
    fn test_file_info_missing() {
        let (_tmp, ops) = engine();
        assert!(matches!(ops.get_file_info("none"), Err(StorageError::NotFound(_))));
    }
}
