//! MCP tools exposed by the server
//!
//! Each tool validates a typed request, performs one synchronous computation
//! and returns an [`Envelope`]. The [`ToolInvoker`] routes calls by name and
//! rejects malformed arguments before any tool runs.

pub mod calculator;
pub mod echo;
pub mod list_files;
pub mod system_info;

// Re-export tool functions for easy access
pub use calculator::*;
pub use echo::*;
pub use list_files::*;
pub use system_info::*;

use chrono::{Local, SecondsFormat};
use schemars::JsonSchema;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{json, Map, Value};
use thiserror::Error;
use tracing::debug;

use crate::envelope::Envelope;

/// Tool names as advertised in `tools/list`
pub const CALCULATOR: &str = "calculator";
pub const LIST_FILES: &str = "list_files";
pub const SYSTEM_INFO: &str = "system_info";
pub const ECHO: &str = "echo";

/// Reasons a tool call is refused before the tool runs
#[derive(Error, Debug)]
pub enum InvokeError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Invalid arguments for tool '{tool}': {source}")]
    InvalidArguments {
        tool: String,
        #[source]
        source: serde_json::Error,
    },
}

/// MCP tool definition
///
/// This describes a tool to the client: its name, what it does, and the JSON
/// schema of its arguments.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub input_schema: Value,
}

/// Routes tool calls to their implementations
///
/// Stateless; every call is independent.
#[derive(Debug, Clone, Default)]
pub struct ToolInvoker;

impl ToolInvoker {
    pub fn new() -> Self {
        Self
    }

    /// Describe every tool this invoker can run
    pub fn definitions(&self) -> Vec<ToolDefinition> {
        vec![
            definition::<CalculationRequest>(
                CALCULATOR,
                "Perform basic arithmetic calculations. Supports add, subtract, multiply and divide on two numbers.",
            ),
            definition::<FileListRequest>(
                LIST_FILES,
                "List files in a directory with optional glob pattern matching.",
            ),
            definition::<SystemInfoRequest>(
                SYSTEM_INFO,
                "Get system information and a safe subset of environment details.",
            ),
            definition::<EchoRequest>(
                ECHO,
                "Echo a message back to the client along with a timestamp and its length.",
            ),
        ]
    }

    /// Validate `arguments` for tool `name` and run it
    ///
    /// Failures inside a tool come back as an error envelope; only unknown
    /// tools and malformed arguments are returned as `Err`.
    pub fn invoke(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<Envelope<Value>, InvokeError> {
        debug!("Invoking tool {}", name);

        let envelope = match name {
            CALCULATOR => calculate(&parse_arguments(name, arguments)?).into_json(),
            LIST_FILES => list_files(&parse_arguments(name, arguments)?).into_json(),
            SYSTEM_INFO => {
                let _: SystemInfoRequest = parse_arguments(name, arguments)?;
                system_info().into_json()
            }
            ECHO => echo(&parse_arguments(name, arguments)?).into_json(),
            _ => return Err(InvokeError::UnknownTool(name.to_string())),
        };

        Ok(envelope)
    }
}

fn parse_arguments<T: DeserializeOwned>(
    tool: &str,
    arguments: Map<String, Value>,
) -> Result<T, InvokeError> {
    serde_json::from_value(Value::Object(arguments)).map_err(|source| InvokeError::InvalidArguments {
        tool: tool.to_string(),
        source,
    })
}

fn definition<T: JsonSchema>(name: &str, description: &str) -> ToolDefinition {
    let schema = schemars::schema_for!(T);
    let mut input_schema =
        serde_json::to_value(&schema).unwrap_or_else(|_| json!({"type": "object"}));

    // Clients expect a plain object schema, not a standalone document
    if let Some(object) = input_schema.as_object_mut() {
        object.remove("$schema");
        object.remove("title");
    }

    ToolDefinition {
        name: name.to_string(),
        description: description.to_string(),
        input_schema,
    }
}

/// Current local time as ISO-8601
pub(crate) fn timestamp() -> String {
    Local::now().to_rfc3339_opts(SecondsFormat::Micros, false)
}
