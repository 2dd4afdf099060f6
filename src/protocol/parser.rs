//! Tool call parsing
//!
//! Turns a generic `{name, args}` call into a typed `OperationRequest`.

use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::ProtocolError;
use crate::protocol::commands::{OperationRequest, Tool};

/// Body of `POST /tools/call`.
///
/// `args` may be a JSON object or a string holding JSON-encoded arguments.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolCall {
    pub name: String,
    #[serde(default)]
    pub args: Value,
}

/// Parses a tool call into the request for the matching operation.
pub fn parse_call(call: ToolCall) -> Result<OperationRequest, ProtocolError> {
    let tool = Tool::from_name(&call.name).ok_or(ProtocolError::UnknownTool(call.name))?;

    let args = match call.args {
        Value::String(encoded) => serde_json::from_str(&encoded).map_err(|source| {
            ProtocolError::InvalidArguments {
                tool: tool.name(),
                source,
            }
        })?,
        Value::Null => Value::Object(Default::default()),
        other => other,
    };

    let request = match tool {
        Tool::ReadFile => OperationRequest::Read(decode(tool, args)?),
        Tool::WriteFile => OperationRequest::Write(decode(tool, args)?),
        Tool::CreateDirectory => OperationRequest::Mkdir(decode(tool, args)?),
        Tool::ListDirectory => OperationRequest::List(decode(tool, args)?),
        Tool::MoveFile => OperationRequest::Move(decode(tool, args)?),
        Tool::GetFileInfo => OperationRequest::Stat(decode(tool, args)?),
    };
    Ok(request)
}

fn decode<T: DeserializeOwned>(tool: Tool, args: Value) -> Result<T, ProtocolError> {
    serde_json::from_value(args).map_err(|source| ProtocolError::InvalidArguments {
        tool: tool.name(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::commands::{MoveFileRequest, WriteFileRequest};
    use serde_json::json;

    fn call(name: &str, args: Value) -> ToolCall {
        ToolCall {
            name: name.to_string(),
            args,
        }
    }

    #[test]
    fn test_parse_object_args() {
        let req = parse_call(call(
            "write_file",
            json!({"path": "a.txt", "content": "hi"}),
        ))
        .unwrap();
        assert_eq!(
            req,
            OperationRequest::Write(WriteFileRequest {
                path: "a.txt".into(),
                content: "hi".into(),
            })
        );
    }

    #[test]
    fn test_parse_string_encoded_args() {
        let req = parse_call(call(
            "filesystem_move_file",
            json!(r#"{"source": "/workspace/demo/config.json", "destination": "/workspace/demo/settings.json"}"#),
        ))
        .unwrap();
        assert_eq!(
            req,
            OperationRequest::Move(MoveFileRequest {
                source_path: "/workspace/demo/config.json".into(),
                destination_path: "/workspace/demo/settings.json".into(),
            })
        );
    }

    #[test]
    fn test_unknown_tool() {
        let err = parse_call(call("run_ipython_cell", json!({"code": "1"}))).unwrap_err();
        assert!(matches!(err, ProtocolError::UnknownTool(name) if name == "run_ipython_cell"));
    }

    #[test]
    fn test_missing_field_is_invalid_arguments() {
        let err = parse_call(call("write_file", json!({"path": "a.txt"}))).unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::InvalidArguments { tool: "write_file", .. }
        ));

        let err = parse_call(call("read_file", Value::Null)).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidArguments { .. }));

        let err = parse_call(call("read_file", json!("{not json"))).unwrap_err();
        assert!(matches!(err, ProtocolError::InvalidArguments { .. }));
    }
}
