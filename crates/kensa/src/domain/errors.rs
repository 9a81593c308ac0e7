//! Domain Errors
//!
//! The engine itself is total over its inputs; these errors only arise at
//! the tool boundary, before the engine is reached.

use thiserror::Error;

/// Errors rejecting a tool call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ToolError {
    #[error("Error: No prompt provided")]
    MissingPrompt,

    #[error("Error: Unknown tool '{0}'")]
    UnknownTool(String),

    #[error("Error: Invalid arguments: {0}")]
    InvalidArguments(String),
}

impl ToolError {
    pub fn invalid_arguments<T: Into<String>>(msg: T) -> Self {
        Self::InvalidArguments(msg.into())
    }
}
