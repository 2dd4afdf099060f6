//! Operation dispatch
//!
//! Routes a typed request to the matching storage operation and wraps the
//! outcome in the response envelope. Nothing here can fail: every storage
//! error becomes a failed `FileOperationResult`.

use log::warn;

use crate::protocol::commands::OperationRequest;
use crate::protocol::responses::{FileOperationResult, OperationData};
use crate::storage::FileOperations;

/// Executes one request against the workspace.
pub fn handle_command(ops: &FileOperations, request: &OperationRequest) -> FileOperationResult {
    let tool = request.tool();
    let outcome = match request {
        OperationRequest::Read(req) => ops.read_file(&req.path).map(OperationData::Read),
        OperationRequest::Write(req) => ops
            .write_file(&req.path, &req.content)
            .map(OperationData::Write),
        OperationRequest::Mkdir(req) => ops.create_directory(&req.path).map(OperationData::Mkdir),
        OperationRequest::List(req) => ops.list_directory(&req.path).map(OperationData::List),
        OperationRequest::Move(req) => ops
            .move_file(&req.source_path, &req.destination_path)
            .map(OperationData::Move),
        OperationRequest::Stat(req) => ops.get_file_info(&req.path).map(OperationData::Stat),
    };

    match outcome {
        Ok(data) => FileOperationResult::success(tool, data),
        Err(e) => {
            warn!("{} failed: {}", tool.name(), e);
            FileOperationResult::failure(tool, &e)
        }
    }
}
