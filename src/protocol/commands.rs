//! Module `commands`
//!
//! Defines the typed requests accepted by the sandbox, one per tool, and the
//! tool catalogue advertised to clients.

use serde::{Deserialize, Serialize};

/// Request to read file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ReadFileRequest {
    pub path: String,
}

/// Request to write file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct WriteFileRequest {
    pub path: String,
    pub content: String,
}

/// Request to create directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CreateDirectoryRequest {
    pub path: String,
}

/// Request to list directory
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ListDirectoryRequest {
    pub path: String,
}

/// Request to move/rename file
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct MoveFileRequest {
    #[serde(alias = "source")]
    pub source_path: String,
    #[serde(alias = "destination")]
    pub destination_path: String,
}

/// Request to get file info
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GetFileInfoRequest {
    pub path: String,
}

/// A parsed request for exactly one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OperationRequest {
    Read(ReadFileRequest),
    Write(WriteFileRequest),
    Mkdir(CreateDirectoryRequest),
    List(ListDirectoryRequest),
    Move(MoveFileRequest),
    Stat(GetFileInfoRequest),
}

impl OperationRequest {
    pub fn tool(&self) -> Tool {
        match self {
            OperationRequest::Read(_) => Tool::ReadFile,
            OperationRequest::Write(_) => Tool::WriteFile,
            OperationRequest::Mkdir(_) => Tool::CreateDirectory,
            OperationRequest::List(_) => Tool::ListDirectory,
            OperationRequest::Move(_) => Tool::MoveFile,
            OperationRequest::Stat(_) => Tool::GetFileInfo,
        }
    }
}

/// The operations exposed over HTTP, keyed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tool {
    ReadFile,
    WriteFile,
    CreateDirectory,
    ListDirectory,
    MoveFile,
    GetFileInfo,
}

/// Catalogue entry returned by `/tools/list`.
#[derive(Debug, Clone, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub parameters: &'static [&'static str],
}

impl Tool {
    pub const ALL: [Tool; 6] = [
        Tool::ReadFile,
        Tool::WriteFile,
        Tool::CreateDirectory,
        Tool::ListDirectory,
        Tool::MoveFile,
        Tool::GetFileInfo,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Tool::ReadFile => "read_file",
            Tool::WriteFile => "write_file",
            Tool::CreateDirectory => "create_directory",
            Tool::ListDirectory => "list_directory",
            Tool::MoveFile => "move_file",
            Tool::GetFileInfo => "get_file_info",
        }
    }

    /// Looks a tool up by wire name; a `filesystem_` prefix is accepted.
    pub fn from_name(name: &str) -> Option<Tool> {
        let name = name.trim();
        let name = name.strip_prefix("filesystem_").unwrap_or(name);
        Tool::ALL.into_iter().find(|tool| tool.name() == name)
    }

    pub fn descriptor(self) -> ToolDescriptor {
        let (description, parameters): (&'static str, &'static [&'static str]) = match self {
            Tool::ReadFile => ("Read the UTF-8 text content of a file", &["path"]),
            Tool::WriteFile => (
                "Write text to a file, creating parent directories as needed",
                &["path", "content"],
            ),
            Tool::CreateDirectory => ("Create a directory and any missing parents", &["path"]),
            Tool::ListDirectory => ("List the immediate children of a directory", &["path"]),
            Tool::MoveFile => (
                "Move or rename a file or directory without overwriting",
                &["source_path", "destination_path"],
            ),
            Tool::GetFileInfo => ("Get metadata for a file or directory", &["path"]),
        };
        ToolDescriptor {
            name: self.name(),
            description,
            parameters,
        }
    }
}
