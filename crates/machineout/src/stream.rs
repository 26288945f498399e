//! Stream processing for piped failure data
//!
//! Two input modes: newline-delimited JSON failure events (the default), and
//! a single raw doctest report. Both write the line protocol to the supplied
//! sink and return how many records or events were processed.

use std::io::{BufRead, Read, Write};
use std::path::Path;

use tracing::info;

use crate::event::FailureEvent;
use crate::formatter::{FormatError, MachineFormatter};
use machineout_report::FailureKind;

/// Process newline-delimited JSON failure events
///
/// Blank lines are skipped. Each event is dispatched to the hook matching its
/// kind. A line that is not valid JSON is fatal.
///
/// # Errors
///
/// Returns `FormatError` on the first undecodable line, report error, or sink
/// write failure.
pub fn process_events<R: BufRead, W: Write>(
    input: R,
    sink: W,
    project_root: &Path,
) -> Result<usize, FormatError> {
    let mut formatter = MachineFormatter::new(project_root, sink);
    let mut count = 0;

    for line in input.lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let event: FailureEvent = serde_json::from_str(line)?;
        match event.kind {
            FailureKind::Error => formatter.on_error(&event)?,
            FailureKind::Fail => formatter.on_failure(&event)?,
        }
        count += 1;
    }

    info!(events = count, "processed failure events");
    Ok(count)
}

/// Process the whole input as one raw doctest failure report
///
/// # Errors
///
/// Returns `FormatError` if the input cannot be read, a section is malformed,
/// or the sink cannot be written.
pub fn process_report<R: Read, W: Write>(
    mut input: R,
    sink: W,
    project_root: &Path,
) -> Result<usize, FormatError> {
    let mut report = String::new();
    input.read_to_string(&mut report)?;

    let mut formatter = MachineFormatter::new(project_root, sink);
    let count = formatter.format_doctest_report(&report)?;
    info!(records = count, "processed doctest report");
    Ok(count)
}
