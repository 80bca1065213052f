//! Runtime configuration for the server

/// Name reported to clients when none is configured
pub const DEFAULT_SERVER_NAME: &str = "Basic MCP Server";

/// Settings the server is started with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Name reported in the `initialize` response
    pub name: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_SERVER_NAME.to_string(),
        }
    }
}

impl ServerConfig {
    /// Use `name`, falling back to the default when it is blank
    pub fn with_name(name: Option<String>) -> Self {
        match name {
            Some(name) if !name.trim().is_empty() => Self {
                name: name.trim().to_string(),
            },
            _ => Self::default(),
        }
    }
}
