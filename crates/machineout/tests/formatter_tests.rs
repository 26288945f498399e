// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Tests for the failure-formatting hooks
//!
//! This module tests:
//! - Traceback failures through frame selection to output lines
//! - Doctest aggregate reports through the section parser
//! - Hook kind labeling (`on_error` vs `on_failure`)
//! - Error propagation for empty tracebacks and malformed reports

use machineout::event::{ExceptionInfo, FailureEvent};
use machineout::formatter::{FormatError, MachineFormatter};
use machineout_report::{FailureKind, ReportError, StackFrame};
use similar_asserts::assert_eq;

fn event(kind: FailureKind, type_name: &str, value: &str, frames: Vec<StackFrame>) -> FailureEvent {
    FailureEvent {
        test: "tests.test_app.test_case".to_string(),
        kind,
        exception: ExceptionInfo {
            type_name: type_name.to_string(),
            value: value.to_string(),
        },
        frames,
    }
}

fn format_with<F>(f: F) -> String
where
    F: FnOnce(&mut MachineFormatter<&mut Vec<u8>>) -> Result<(), FormatError>,
{
    let mut sink = Vec::new();
    let mut formatter = MachineFormatter::new("/project", &mut sink);
    f(&mut formatter).expect("formatting should succeed");
    String::from_utf8(sink).expect("utf8")
}

// ============================================================================
// Traceback Failures
// ============================================================================

#[test]
fn test_on_failure_selects_test_frame() {
    let frames = vec![
        StackFrame::new("/usr/lib/harness/case.rs", 88, "assert_that", ""),
        StackFrame::new("/project/tests/test_app.rs", 21, "test_case", "check()"),
        StackFrame::new("/project/src/app.rs", 7, "check", "inner()"),
    ];
    let e = event(FailureKind::Fail, "AssertionError", "False is not true", frames);

    let text = format_with(|f| f.on_failure(&e));
    assert_eq!(
        text,
        "tests/test_app.rs:21: fail: AssertionError: False is not true\n"
    );
}

#[test]
fn test_on_error_labels_error() {
    let frames = vec![StackFrame::new("/project/src/app.rs", 7, "check", "")];
    let e = event(FailureKind::Error, "ValueError", "bad input", frames);

    let text = format_with(|f| f.on_error(&e));
    assert_eq!(text, "src/app.rs:7: error: ValueError: bad input\n");
}

#[test]
fn test_multiline_exception_value_continues() {
    let frames = vec![StackFrame::new("/project/src/app.rs", 7, "check", "")];
    let e = event(
        FailureKind::Error,
        "SyntaxError",
        "invalid syntax\n  x ===== 1\n      ^",
        frames,
    );

    let text = format_with(|f| f.on_error(&e));
    assert_eq!(
        text,
        "src/app.rs:7: error: SyntaxError: invalid syntax\n\
         src/app.rs:7:          x ===== 1\n\
         src/app.rs:7:              ^\n"
    );
}

#[test]
fn test_empty_traceback_is_rejected() {
    let e = event(FailureKind::Fail, "AssertionError", "boom", vec![]);

    let mut sink = Vec::new();
    let mut formatter = MachineFormatter::new("/project", &mut sink);
    let result = formatter.on_failure(&e);
    assert!(matches!(
        result,
        Err(FormatError::Report(ReportError::EmptyTraceback))
    ));
}

// ============================================================================
// Doctest Reports
// ============================================================================

#[test]
fn test_doctest_value_dispatches_to_report_parser() {
    let report = r#"Failed doctest test for pkg.mod.foo_fn
  File "/project/pkg/mod.py", line 1, in foo_fn
-------------------------------------------------
File "/project/pkg/mod.py", line 5, in foo_fn
Failed example:
    foo_bar()
Expected:
    foo
Got nothing
-------------------------------------------------
File "/project/pkg/mod.py", line 9, in foo_fn
Failed example:
    foo_fn()
Expected:
    foo
Got:
    bar
"#;
    // Frames are ignored for doctest failures; kinds come from the sections
    let e = event(FailureKind::Error, "Failure", report, vec![]);

    let text = format_with(|f| f.on_error(&e));
    assert_eq!(
        text,
        "pkg/mod.py:5: fail: expected \"foo\" but got nothing\n\
         pkg/mod.py:9: fail: expected \"foo\" but got \"bar\"\n"
    );
}

#[test]
fn test_doctest_exception_section_reorders_headline() {
    let report = r#"Failed doctest test for pkg.mod.foo_fn
  File "/project/pkg/mod.py", line 1, in foo_fn
-------------------------------------------------
File "/project/pkg/mod.py", line 10, in foo_fn
Failed example:
    print(bar)
Exception raised:
    Traceback (most recent call last):
      ...
    NameError: name 'bar' is not defined
"#;
    let e = event(FailureKind::Error, "Failure", report, vec![]);

    let text = format_with(|f| f.on_error(&e));
    assert_eq!(
        text,
        "pkg/mod.py:10: error: NameError: name 'bar' is not defined\n\
         pkg/mod.py:10:        Traceback (most recent call last):\n\
         pkg/mod.py:10:          ...\n"
    );
}

#[test]
fn test_malformed_doctest_report_propagates() {
    let mut sink = Vec::new();
    let mut formatter = MachineFormatter::new("/project", &mut sink);
    let result = formatter.format_doctest_report("Failed doctest test\n----\nnot a section\n");
    assert!(matches!(
        result,
        Err(FormatError::Report(ReportError::MalformedSection { .. }))
    ));
}

#[test]
fn test_format_doctest_report_counts_records() {
    let report = r#"Failed doctest test for foo
----------
File "/project/foo.py", line 2, in foo
Failed example:
    foo()
Expected:
    1
Got:
    2
----------
File "/project/foo.py", line 4, in foo
Failed example:
    foo()
Expected:
    1
Got nothing
"#;
    let mut sink = Vec::new();
    let mut formatter = MachineFormatter::new("/project", &mut sink);
    let count = formatter
        .format_doctest_report(report)
        .expect("Should format");
    assert_eq!(count, 2);
}
