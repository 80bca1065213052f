//! Tool for echoing a message back to the client
//!
//! Useful for testing connectivity; it always succeeds.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::envelope::Envelope;
use crate::tools::timestamp;

/// Parameters for echo
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct EchoRequest {
    /// The message to echo
    pub message: String,
}

/// Response from echo
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EchoResponse {
    pub message: String,
    pub timestamp: String,
    /// Length in characters, not bytes
    pub length: usize,
}

/// Echo the message with a timestamp and its length
pub fn echo(request: &EchoRequest) -> Envelope<EchoResponse> {
    Envelope::Success(EchoResponse {
        message: request.message.clone(),
        timestamp: timestamp(),
        length: request.message.chars().count(),
    })
}
