//! Public library interface for the Basic MCP server
//!
//! This crate exposes four example tools (calculator, list_files, system_info,
//! echo) over the Model Context Protocol. Every tool returns an [`Envelope`]:
//! either a success payload or a structured error, never a fault that escapes
//! the tool boundary.

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncWrite};

mod config;
mod envelope;
pub mod mcp;
pub mod tools;

// Re-export public types
pub use config::{ServerConfig, DEFAULT_SERVER_NAME};
pub use envelope::{Envelope, ToolFailure};
pub use tools::{InvokeError, ToolDefinition, ToolInvoker};

/// Errors that can stop the server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main server that exposes the tools over MCP
pub struct BasicMcpServer {
    config: ServerConfig,
    tools: ToolInvoker,
}

impl BasicMcpServer {
    /// Create a new server with the given configuration
    pub fn new(config: ServerConfig) -> Self {
        tracing::info!("Initializing {}", config.name);

        Self {
            config,
            tools: ToolInvoker::new(),
        }
    }

    /// Run the MCP server, handling JSON-RPC requests over stdin/stdout
    ///
    /// Returns once stdin is closed or an I/O error occurs.
    pub async fn run(self) -> Result<(), ServerError> {
        tracing::info!(
            "Starting MCP server with {} tools",
            self.tools.definitions().len()
        );

        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.run().await
    }

    /// Run the MCP server over arbitrary streams
    pub async fn serve<R, W>(self, reader: R, writer: W) -> Result<(), ServerError>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut mcp_server = mcp::McpServer::new(self);
        mcp_server.serve(reader, writer).await
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// Get a reference to the tool invoker (useful for testing)
    pub fn tools(&self) -> &ToolInvoker {
        &self.tools
    }
}
