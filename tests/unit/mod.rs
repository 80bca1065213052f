//! Unit tests for the tool request/response contract

mod tool_contracts;
