//! Error types
//!
//! Defines domain-specific error types for each module of the sandbox server.

use serde::Serialize;
use std::io;
use std::string::FromUtf8Error;

/// Machine-readable failure category reported alongside every failed outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    AccessDenied,
    NotFound,
    NotAFile,
    NotADirectory,
    AlreadyExists,
    DecodeError,
    OperationFailed,
    InvalidRequest,
}

/// Storage module errors
///
/// Every variant carries the path string exactly as the caller supplied it.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    #[error("Access denied: path outside workspace: {0}")]
    AccessDenied(String),

    #[error("Path does not exist: {0}")]
    NotFound(String),

    #[error("Path is not a file: {0}")]
    NotAFile(String),

    #[error("Path is not a directory: {0}")]
    NotADirectory(String),

    #[error("Path already exists: {0}")]
    AlreadyExists(String),

    #[error("File is not valid UTF-8: {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: FromUtf8Error,
    },

    #[error("{context} {path}: {source}")]
    OperationFailed {
        context: &'static str,
        path: String,
        #[source]
        source: io::Error,
    },
}

impl StorageError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            StorageError::AccessDenied(_) => ErrorKind::AccessDenied,
            StorageError::NotFound(_) => ErrorKind::NotFound,
            StorageError::NotAFile(_) => ErrorKind::NotAFile,
            StorageError::NotADirectory(_) => ErrorKind::NotADirectory,
            StorageError::AlreadyExists(_) => ErrorKind::AlreadyExists,
            StorageError::Decode { .. } => ErrorKind::DecodeError,
            StorageError::OperationFailed { .. } => ErrorKind::OperationFailed,
        }
    }

    /// Wraps an unexpected I/O failure, keeping the OS error as the cause.
    pub(crate) fn io<'a>(
        context: &'static str,
        path: &'a str,
    ) -> impl FnOnce(io::Error) -> Self + 'a {
        move |source| StorageError::OperationFailed {
            context,
            path: path.to_string(),
            source,
        }
    }
}

/// Authentication module errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    #[error("Authentication required")]
    MissingToken,

    #[error("Invalid token")]
    InvalidToken,
}

/// Request decoding errors raised before any storage call is made
#[derive(Debug, thiserror::Error)]
pub enum ProtocolError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for {tool}: {source}")]
    InvalidArguments {
        tool: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

/// Startup errors that stop the server before it begins accepting requests
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Workspace directory {path} is unusable: {source}")]
    Workspace {
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}
