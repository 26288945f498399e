//! Failure record types

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// The two kinds of reportable failure
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailureKind {
    /// The test raised an unexpected exception
    Error,
    /// The test ran but an assertion or expected output did not hold
    Fail,
}

impl FailureKind {
    /// The label emitted on the output line
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            FailureKind::Error => "error",
            FailureKind::Fail => "fail",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One formatted failure, ready for line emission
///
/// Created per reported failure and consumed immediately by the emitter;
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureRecord {
    /// Failure kind (error or fail)
    pub kind: FailureKind,
    /// File the failure points at
    pub file: PathBuf,
    /// Line number within the file
    pub line: u32,
    /// Message lines; the first is the headline, the rest are detail
    pub lines: Vec<String>,
}

impl FailureRecord {
    /// Build a record from its parts
    #[must_use]
    pub fn new(
        kind: FailureKind,
        file: impl Into<PathBuf>,
        line: u32,
        lines: Vec<String>,
    ) -> Self {
        Self {
            kind,
            file: file.into(),
            line,
            lines,
        }
    }

    /// The headline message line, if any
    #[must_use]
    pub fn headline(&self) -> Option<&str> {
        self.lines.first().map(String::as_str)
    }
}
