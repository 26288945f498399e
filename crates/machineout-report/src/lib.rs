// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! machineout-report: Failure-report formatting core for machineout
//!
//! This library crate turns raw test-failure data (stack traces and doctest
//! failure reports) into normalized `<path>:<line>: <kind>: <message>` records
//! for consumption by editors and IDEs.

#![warn(missing_docs)]

//! # Example
//!
//! ```
//! use machineout_report::{FailureKind, FailureRecord, FrameSelector, LineEmitter, StackFrame};
//!
//! let selector = FrameSelector::new("/project");
//! let frames = vec![StackFrame::new("/project/tests/test_foo.rs", 12, "test_foo", "check(1)")];
//! let frame = selector.select(&frames).expect("non-empty traceback");
//!
//! let record = FailureRecord::new(
//!     FailureKind::Fail,
//!     frame.file.clone(),
//!     frame.line,
//!     vec!["assertion failed".to_string()],
//! );
//! let emitter = LineEmitter::new("/project");
//! assert_eq!(
//!     emitter.render(&record),
//!     vec!["tests/test_foo.rs:12: fail: assertion failed"]
//! );
//! ```

pub mod doctest;
pub mod emit;
pub mod error;
pub mod frame;
pub mod record;

pub use doctest::{DoctestSection, SectionOutcome, Sections, is_doctest_failure, parse_report};
pub use emit::LineEmitter;
pub use error::ReportError;
pub use frame::{FrameSelector, StackFrame};
pub use record::{FailureKind, FailureRecord};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::doctest::{is_doctest_failure, parse_report};
    pub use crate::emit::LineEmitter;
    pub use crate::error::ReportError;
    pub use crate::frame::{FrameSelector, StackFrame};
    pub use crate::record::{FailureKind, FailureRecord};
}
