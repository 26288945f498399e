// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Failure formatting hooks
//!
//! [`MachineFormatter`] is the composition point of the two core components:
//! it exposes the `on_error`/`on_failure` hook pair a test framework calls per
//! failure, and turns each event into output lines on an injected sink.
//! Doctest aggregate reports are parsed into one record per failed example;
//! everything else goes through frame selection and emits a single record.

use std::io::Write;
use std::path::Path;

use thiserror::Error;
use tracing::debug;

use crate::event::FailureEvent;
use machineout_report::{
    FailureKind, FailureRecord, FrameSelector, LineEmitter, ReportError, is_doctest_failure,
    parse_report,
};

/// Formatting errors
#[derive(Debug, Error)]
pub enum FormatError {
    /// Error from the report core (frame selection or doctest parsing)
    #[error("Report error: {0}")]
    Report(#[from] ReportError),

    /// Error decoding a failure event
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Error writing to the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Formats reported failures into machine-parsable lines on a sink
pub struct MachineFormatter<W: Write> {
    selector: FrameSelector,
    emitter: LineEmitter,
    sink: W,
}

impl<W: Write> MachineFormatter<W> {
    /// Create a formatter rooted at the given project directory, writing to
    /// the given sink
    pub fn new(project_root: impl AsRef<Path>, sink: W) -> Self {
        let root = project_root.as_ref();
        Self {
            selector: FrameSelector::new(root),
            emitter: LineEmitter::new(root),
            sink,
        }
    }

    /// Hook invoked for a test that raised an unexpected exception
    ///
    /// # Errors
    ///
    /// Propagates parse errors for malformed doctest reports, empty-traceback
    /// rejection, and sink write failures.
    pub fn on_error(&mut self, event: &FailureEvent) -> Result<(), FormatError> {
        self.format(FailureKind::Error, event)
    }

    /// Hook invoked for a test whose assertion or expected output failed
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::on_error`].
    pub fn on_failure(&mut self, event: &FailureEvent) -> Result<(), FormatError> {
        self.format(FailureKind::Fail, event)
    }

    fn format(&mut self, kind: FailureKind, event: &FailureEvent) -> Result<(), FormatError> {
        if is_doctest_failure(&event.exception.value) {
            // Doctest kinds come from the per-section outcomes, not the hook
            self.format_doctest_report(&event.exception.value)?;
            return Ok(());
        }

        let frame = self.selector.select(&event.frames)?;
        let record = FailureRecord::new(
            kind,
            frame.file.clone(),
            frame.line,
            event.exception.display_lines(),
        );
        debug!(test = %event.test, file = %record.file.display(), "formatted failure");
        self.emitter.write_record(&mut self.sink, &record)?;
        Ok(())
    }

    /// Format one aggregate doctest report, returning the record count
    ///
    /// # Errors
    ///
    /// Returns the first malformed-section error; sections before it have
    /// already been written.
    pub fn format_doctest_report(&mut self, report: &str) -> Result<usize, FormatError> {
        let mut count = 0;
        for record in parse_report(report) {
            let record = record?;
            self.emitter.write_record(&mut self.sink, &record)?;
            count += 1;
        }
        debug!(records = count, "formatted doctest report");
        Ok(count)
    }

    /// Consume the formatter and return the sink
    pub fn into_sink(self) -> W {
        self.sink
    }
}
