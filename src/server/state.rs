//! Shared request state

use crate::storage::FileOperations;

/// State handed to every request handler. Read-only after startup.
#[derive(Debug, Clone)]
pub struct AppState {
    pub ops: FileOperations,
    pub session_id: String,
    pub workspace_dir: String,
}
