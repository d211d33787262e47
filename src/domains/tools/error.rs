//! Tool-specific error types.

use thiserror::Error;

use crate::api::ApiError;

/// Errors that can occur while resolving or executing a tool call.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The requested tool is not registered.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The tool mutates remote state and the server runs read-only.
    #[error("Tool '{0}' is not available in read-only mode")]
    ReadOnlyMode(String),

    /// The caller's arguments did not match the tool's input schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// The upstream MILKEE call failed.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// A result could not be serialized for the client.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ToolError {
    /// Create a new "unknown tool" error.
    pub fn unknown_tool(name: impl Into<String>) -> Self {
        Self::UnknownTool(name.into())
    }

    /// Create a new "read-only mode" error.
    pub fn read_only(name: impl Into<String>) -> Self {
        Self::ReadOnlyMode(name.into())
    }

    /// Create a new "invalid arguments" error.
    pub fn invalid_arguments(msg: impl Into<String>) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
