//! Storage result types
//!
//! Defines the success payloads returned by storage operations.

use serde::Serialize;

/// Kind tag reported for listed entries and stat results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Directory,
}

/// Result of a file read operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReadResult {
    pub content: String,
    pub path: String,
}

/// Result of a file write operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WriteResult {
    pub path: String,
    /// Bytes written, i.e. the UTF-8 length of the content.
    pub size: u64,
}

/// Result of a directory creation operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CreateDirectoryResult {
    pub path: String,
    /// `false` when the directory was already there.
    pub created: bool,
}

/// One immediate child of a listed directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    /// Present only for files.
    pub size: Option<u64>,
    /// Relative to the workspace root.
    pub path: String,
}

/// Result of a directory listing operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ListResult {
    pub path: String,
    pub items: Vec<DirectoryEntry>,
}

/// Result of a move/rename operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MoveResult {
    pub source_path: String,
    pub destination_path: String,
}

/// Result of a stat operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileInfo {
    pub path: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: EntryKind,
    pub size: u64,
    /// Seconds since the Unix epoch.
    pub modified_time: f64,
    /// Seconds since the Unix epoch.
    pub created_time: f64,
    /// Low nine mode bits as three octal digits, e.g. `"644"`.
    pub permissions: String,
}
