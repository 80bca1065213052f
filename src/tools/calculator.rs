//! Tool for basic arithmetic
//!
//! This module implements the calculator MCP tool: add, subtract, multiply and
//! divide over two numbers.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::envelope::{Envelope, ToolFailure};

/// Parameters for a calculation
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CalculationRequest {
    /// The operation to perform: add, subtract, multiply, divide
    pub operation: String,
    /// First number
    pub a: f64,
    /// Second number
    pub b: f64,
}

/// The two operands, echoed back in every response
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Operands {
    pub a: f64,
    pub b: f64,
}

/// Response from a successful calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CalculationResult {
    pub result: f64,
    pub operation: String,
    pub inputs: Operands,
}

/// Arithmetic operations the calculator understands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Every supported operation, in the order they are advertised
    pub const ALL: [Operation; 4] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
    ];

    /// Parse an operation name (exact match)
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.name() == name)
    }

    /// Wire name of this operation
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
        }
    }

    fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Operation::Add => a + b,
            Operation::Subtract => a - b,
            Operation::Multiply => a * b,
            Operation::Divide => a / b,
        }
    }
}

/// Perform a calculation
pub fn calculate(request: &CalculationRequest) -> Envelope<CalculationResult> {
    let inputs = Operands {
        a: request.a,
        b: request.b,
    };

    let operation = match Operation::parse(&request.operation) {
        Some(op) => op,
        None => {
            let supported: Vec<&str> = Operation::ALL.iter().map(|op| op.name()).collect();
            return Envelope::Error(
                ToolFailure::new(format!("Unknown operation: {}", request.operation))
                    .with("supported_operations", json!(supported)),
            );
        }
    };

    if operation == Operation::Divide && request.b == 0.0 {
        return Envelope::Error(failure_with_inputs(
            "Division by zero is not allowed".to_string(),
            &request.operation,
            inputs,
        ));
    }

    let result = operation.apply(request.a, request.b);

    // JSON has no representation for infinities or NaN
    if !result.is_finite() {
        return Envelope::Error(failure_with_inputs(
            format!("Calculation error: result of {} is not a finite number", operation.name()),
            &request.operation,
            inputs,
        ));
    }

    Envelope::Success(CalculationResult {
        result,
        operation: request.operation.clone(),
        inputs,
    })
}

fn failure_with_inputs(message: String, operation: &str, inputs: Operands) -> ToolFailure {
    ToolFailure::new(message)
        .with("operation", json!(operation))
        .with("inputs", json!({"a": inputs.a, "b": inputs.b}))
}
