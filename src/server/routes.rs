//! HTTP handlers
//!
//! Thin adapters between axum extractors and the operation dispatcher.
//! Filesystem work runs on the blocking pool, one task per request.

use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::error;
use serde::Serialize;

use crate::error::handlers::error_to_status;
use crate::protocol::commands::{
    CreateDirectoryRequest, GetFileInfoRequest, ListDirectoryRequest, MoveFileRequest,
    ReadFileRequest, WriteFileRequest,
};
use crate::protocol::{
    FileOperationResult, OperationRequest, Tool, ToolCall, ToolDescriptor, handle_command,
    parse_call,
};
use crate::server::state::AppState;

/// Detailed health status
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub session_id: String,
    pub workspace_dir: String,
    pub version: &'static str,
    pub service: &'static str,
}

/// Tool catalogue
#[derive(Debug, Serialize)]
pub struct ToolList {
    pub tools: Vec<ToolDescriptor>,
}

pub async fn healthz() -> Json<&'static str> {
    Json("OK")
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        session_id: state.session_id,
        workspace_dir: state.workspace_dir,
        version: env!("CARGO_PKG_VERSION"),
        service: "filesystem-sandbox",
    })
}

pub async fn list_tools() -> Json<ToolList> {
    Json(ToolList {
        tools: Tool::ALL.into_iter().map(Tool::descriptor).collect(),
    })
}

pub async fn read_file(State(state): State<AppState>, Json(req): Json<ReadFileRequest>) -> Response {
    execute(&state, OperationRequest::Read(req)).await
}

pub async fn write_file(
    State(state): State<AppState>,
    Json(req): Json<WriteFileRequest>,
) -> Response {
    execute(&state, OperationRequest::Write(req)).await
}

pub async fn create_directory(
    State(state): State<AppState>,
    Json(req): Json<CreateDirectoryRequest>,
) -> Response {
    execute(&state, OperationRequest::Mkdir(req)).await
}

pub async fn list_directory(
    State(state): State<AppState>,
    Json(req): Json<ListDirectoryRequest>,
) -> Response {
    execute(&state, OperationRequest::List(req)).await
}

pub async fn move_file(State(state): State<AppState>, Json(req): Json<MoveFileRequest>) -> Response {
    execute(&state, OperationRequest::Move(req)).await
}

pub async fn get_file_info(
    State(state): State<AppState>,
    Json(req): Json<GetFileInfoRequest>,
) -> Response {
    execute(&state, OperationRequest::Stat(req)).await
}

/// Generic entry point: `{"name": "<tool>", "args": {...}}`
pub async fn call_tool(State(state): State<AppState>, Json(call): Json<ToolCall>) -> Response {
    match parse_call(call) {
        Ok(request) => execute(&state, request).await,
        Err(e) => {
            let result = FileOperationResult::invalid_request(&e);
            (error_to_status(result.error_kind), Json(result)).into_response()
        }
    }
}

async fn execute(state: &AppState, request: OperationRequest) -> Response {
    let tool = request.tool();
    let ops = state.ops.clone();

    match tokio::task::spawn_blocking(move || handle_command(&ops, &request)).await {
        Ok(result) => (error_to_status(result.error_kind), Json(result)).into_response(),
        Err(e) => {
            error!("{} worker failed: {}", tool.name(), e);
            let result = FileOperationResult::internal(tool, e.to_string());
            (StatusCode::INTERNAL_SERVER_ERROR, Json(result)).into_response()
        }
    }
}
