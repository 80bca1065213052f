//! Result envelope returned by every tool
//!
//! A tool call either succeeds with an operation-specific payload or fails with
//! a human-readable message plus the inputs that caused the failure. Exactly one
//! of the two is produced per invocation; tools never fail past this boundary.

use serde::Serialize;
use serde_json::{Map, Value};

/// Discriminated success/error wrapper
///
/// Serialized untagged, so the wire shape is either the bare success payload
/// or `{"error": "...", <context fields>}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Envelope<T> {
    /// The operation completed and produced its payload
    Success(T),
    /// The operation was refused or failed
    Error(ToolFailure),
}

/// Error payload: a message plus the offending inputs echoed back
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolFailure {
    /// Human-readable description of what went wrong
    pub error: String,
    /// Diagnostic fields (echoed inputs, supported values, ...)
    #[serde(flatten)]
    pub context: Map<String, Value>,
}

impl ToolFailure {
    /// Create a failure with no context fields
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            context: Map::new(),
        }
    }

    /// Attach a diagnostic field
    pub fn with(mut self, key: &str, value: Value) -> Self {
        self.context.insert(key.to_string(), value);
        self
    }

    /// Look up a diagnostic field
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.context.get(key)
    }
}

impl<T> Envelope<T> {
    /// Whether this envelope carries an error
    pub fn is_error(&self) -> bool {
        matches!(self, Envelope::Error(_))
    }

    /// Borrow the success payload, if any
    pub fn success(&self) -> Option<&T> {
        match self {
            Envelope::Success(payload) => Some(payload),
            Envelope::Error(_) => None,
        }
    }

    /// Borrow the failure, if any
    pub fn failure(&self) -> Option<&ToolFailure> {
        match self {
            Envelope::Success(_) => None,
            Envelope::Error(failure) => Some(failure),
        }
    }
}

impl<T: Serialize> Envelope<T> {
    /// Erase the payload type so envelopes from different tools can be routed
    /// through the same dispatcher.
    ///
    /// A payload that cannot be represented as JSON becomes an error envelope
    /// instead of escaping as a fault.
    pub fn into_json(self) -> Envelope<Value> {
        match self {
            Envelope::Success(payload) => match serde_json::to_value(payload) {
                Ok(value) => Envelope::Success(value),
                Err(e) => Envelope::Error(ToolFailure::new(format!("Serialization error: {}", e))),
            },
            Envelope::Error(failure) => Envelope::Error(failure),
        }
    }
}
