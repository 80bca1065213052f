//! Tool for reporting runtime and environment details
//!
//! Only an allow-listed subset of environment variables is ever reported, so
//! secrets held in the server's environment never reach the client.

use std::collections::BTreeMap;
use std::env;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::envelope::{Envelope, ToolFailure};
use crate::tools::timestamp;

/// Environment variables that are safe to expose
pub const SAFE_ENV_VARS: [&str; 6] = ["PATH", "HOME", "USER", "SHELL", "LANG", "PWD"];

/// The system_info tool takes no parameters
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
pub struct SystemInfoRequest {}

/// Snapshot of the server's runtime environment
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SystemInfo {
    pub timestamp: String,
    pub runtime_version: String,
    pub platform: String,
    pub working_directory: String,
    pub environment_variables: BTreeMap<String, String>,
}

/// Report system information from the real process environment
pub fn system_info() -> Envelope<SystemInfo> {
    system_info_with(|name| env::var(name).ok())
}

/// Report system information, resolving environment variables through `lookup`
///
/// `lookup` is only ever asked for names in [`SAFE_ENV_VARS`].
pub fn system_info_with<F>(lookup: F) -> Envelope<SystemInfo>
where
    F: Fn(&str) -> Option<String>,
{
    let working_directory = match env::current_dir() {
        Ok(dir) => dir.to_string_lossy().into_owned(),
        Err(e) => {
            return Envelope::Error(ToolFailure::new(format!("System info error: {}", e)));
        }
    };

    let environment_variables = SAFE_ENV_VARS
        .iter()
        .copied()
        .filter_map(|name| lookup(name).map(|value| (name.to_string(), value)))
        .collect();

    Envelope::Success(SystemInfo {
        timestamp: timestamp(),
        runtime_version: runtime_version(),
        platform: platform(),
        working_directory,
        environment_variables,
    })
}

/// Compiler the server was built with, captured by the build script
fn runtime_version() -> String {
    env!("BUILD_RUSTC_VERSION").to_string()
}

fn platform() -> String {
    format!(
        "{}-{} ({})",
        env::consts::OS,
        env::consts::ARCH,
        env::consts::FAMILY
    )
}
