//! Per-failure event model
//!
//! One event carries what the test framework hands its failure hooks: the
//! test identifier, the failure kind, the exception, and the unwound
//! traceback frames (outermost first).

use machineout_report::{FailureKind, StackFrame};
use serde::{Deserialize, Serialize};

/// A single reported test failure or error
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FailureEvent {
    /// Identifier of the failing test
    pub test: String,
    /// Whether the framework reported this as an error or a failure
    pub kind: FailureKind,
    /// The exception that ended the test
    pub exception: ExceptionInfo,
    /// Traceback frames, caller to callee; empty for doctest failures
    #[serde(default)]
    pub frames: Vec<StackFrame>,
}

/// The exception part of a failure event
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExceptionInfo {
    /// Exception type name
    #[serde(rename = "type")]
    pub type_name: String,
    /// Stringified exception value; may span multiple lines
    pub value: String,
}

impl ExceptionInfo {
    /// Message lines for emission: `<type>: <first value line>` as headline,
    /// remaining value lines as continuations, bare type if the value is empty
    #[must_use]
    pub fn display_lines(&self) -> Vec<String> {
        if self.value.is_empty() {
            return vec![self.type_name.clone()];
        }
        let mut lines: Vec<String> = self.value.lines().map(str::to_string).collect();
        lines[0] = format!("{}: {}", self.type_name, lines[0]);
        lines
    }
}
