//! Sandbox tool protocol
//!
//! Handles request decoding, operation dispatch, and response generation.

pub mod commands;
pub mod handlers;
pub mod parser;
pub mod responses;

pub use commands::{OperationRequest, Tool, ToolDescriptor};
pub use handlers::handle_command;
pub use parser::{ToolCall, parse_call};
pub use responses::{FileOperationResult, OperationData};
