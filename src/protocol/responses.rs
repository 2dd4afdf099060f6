//! Response envelope
//!
//! Every tool call, successful or not, is answered with a `FileOperationResult`.

use serde::Serialize;

use crate::error::{ErrorKind, ProtocolError, StorageError};
use crate::protocol::commands::Tool;
use crate::storage::{
    CreateDirectoryResult, FileInfo, ListResult, MoveResult, ReadResult, WriteResult,
};

/// Operation-specific success payload.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum OperationData {
    Read(ReadResult),
    Write(WriteResult),
    Mkdir(CreateDirectoryResult),
    List(ListResult),
    Move(MoveResult),
    Stat(FileInfo),
}

/// Result of file operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileOperationResult {
    pub success: bool,
    pub message: String,
    pub data: Option<OperationData>,
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
}

impl FileOperationResult {
    pub fn success(tool: Tool, data: OperationData) -> Self {
        let message = match (&data, tool) {
            (OperationData::Mkdir(CreateDirectoryResult { created: false, .. }), _) => {
                "Directory already exists"
            }
            (_, Tool::ReadFile) => "File read successfully",
            (_, Tool::WriteFile) => "File written successfully",
            (_, Tool::CreateDirectory) => "Directory created successfully",
            (_, Tool::ListDirectory) => "Directory listed successfully",
            (_, Tool::MoveFile) => "File moved successfully",
            (_, Tool::GetFileInfo) => "File info retrieved successfully",
        };
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
            error: None,
            error_kind: None,
        }
    }

    pub fn failure(tool: Tool, err: &StorageError) -> Self {
        Self {
            success: false,
            message: failure_message(tool, err).to_string(),
            data: None,
            error: Some(err.to_string()),
            error_kind: Some(err.kind()),
        }
    }

    pub fn invalid_request(err: &ProtocolError) -> Self {
        Self {
            success: false,
            message: "Invalid tool call".to_string(),
            data: None,
            error: Some(err.to_string()),
            error_kind: Some(ErrorKind::InvalidRequest),
        }
    }

    /// Used when the worker running an operation dies before reporting back.
    pub fn internal(tool: Tool, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: generic_failure(tool).to_string(),
            data: None,
            error: Some(detail.into()),
            error_kind: Some(ErrorKind::OperationFailed),
        }
    }
}

fn failure_message(tool: Tool, err: &StorageError) -> &'static str {
    match (tool, err) {
        (Tool::ReadFile, StorageError::NotFound(_)) => "File not found",
        (Tool::ReadFile, StorageError::NotAFile(_)) => "Path is not a file",
        (Tool::CreateDirectory, StorageError::NotADirectory(_)) => {
            "Path exists but is not a directory"
        }
        (Tool::ListDirectory, StorageError::NotFound(_)) => "Directory not found",
        (Tool::ListDirectory, StorageError::NotADirectory(_)) => "Path is not a directory",
        (Tool::MoveFile, StorageError::NotFound(_)) => "Source path not found",
        (Tool::MoveFile, StorageError::AlreadyExists(_)) => "Destination path already exists",
        (Tool::GetFileInfo, StorageError::NotFound(_)) => "Path not found",
        (_, StorageError::AccessDenied(_)) => "Access denied: path outside workspace",
        _ => generic_failure(tool),
    }
}

fn generic_failure(tool: Tool) -> &'static str {
    match tool {
        Tool::ReadFile => "Failed to read file",
        Tool::WriteFile => "Failed to write file",
        Tool::CreateDirectory => "Failed to create directory",
        Tool::ListDirectory => "Failed to list directory",
        Tool::MoveFile => "Failed to move file",
        Tool::GetFileInfo => "Failed to get file info",
    }
}
