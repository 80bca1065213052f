//! Integration tests driving the MCP server over in-memory streams and as a process

mod binary_exit;
mod stdio_session;
