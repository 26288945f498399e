// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Doctest failure-report parsing
//!
//! A failing doctest reports all of its failed examples in one aggregate text
//! blob: a preamble, then one section per failed example, separated by divider
//! lines of repeated dashes. Each section names the file, line, and function,
//! echoes the failing example, and ends in one of three outcomes: an
//! expected/got mismatch, expected output that never appeared, or a raised
//! exception with its traceback.
//!
//! Parsing runs in two decoupled stages so a bad section is diagnosable on its
//! own: stage one splits the blob on divider lines and discards the preamble,
//! stage two runs a structured extractor over each section. The [`Sections`]
//! iterator is lazy and single-pass; the first malformed section is fatal for
//! the whole report and fuses the iterator.

use regex::Regex;
use std::path::PathBuf;
use std::sync::LazyLock;

use crate::error::ReportError;
use crate::record::{FailureKind, FailureRecord};

/// A divider is a line consisting only of repeated dashes
static DIVIDER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*-{2,}[ \t]*$").expect("divider pattern compiles"));

/// Per-section header: `File "<path>", line <N>, in <function>`
static HEADER_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\s*File "(?P<file>[^"]*)", line (?P<line>\d+), in (?P<function>.*)$"#)
        .expect("header pattern compiles")
});

/// Whether an exception value is the aggregate text of a doctest failure
#[must_use]
pub fn is_doctest_failure(value: &str) -> bool {
    value.starts_with("Failed doctest test")
}

/// One delimited section of a doctest failure report
///
/// Invariant: each section maps to exactly one [`FailureRecord`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoctestSection {
    /// File the failed example lives in
    pub file: PathBuf,
    /// Line of the failed example, taken from the section header
    pub line: u32,
    /// Enclosing function or test name
    pub function: String,
    /// Source text of the failing example
    pub example: String,
    /// How the example failed
    pub outcome: SectionOutcome,
}

/// The outcome part of a doctest section
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionOutcome {
    /// The example produced output that differs from the expected block
    Mismatch {
        /// Expected output block, as written in the report
        expected: String,
        /// Actual output block
        got: String,
    },
    /// The example was expected to produce output but produced none
    GotNothing {
        /// Expected output block
        expected: String,
    },
    /// The example raised during execution
    Exception {
        /// The traceback text emitted by the doctest runner
        traceback: String,
    },
}

impl DoctestSection {
    /// Convert the section into its failure record
    ///
    /// Exceptions become `error` records with the traceback's final line
    /// promoted to the headline (it carries the concise type and message);
    /// the other outcomes become single-line `fail` records with the
    /// expected/got blocks dedented and `{:?}`-quoted so embedded whitespace
    /// stays visible.
    #[must_use]
    pub fn into_record(self) -> FailureRecord {
        let (kind, lines) = match self.outcome {
            SectionOutcome::Exception { traceback } => {
                let mut lines: Vec<String> = dedent(traceback.trim_matches('\n'))
                    .lines()
                    .map(str::to_string)
                    .collect();
                if !lines.is_empty() {
                    lines.rotate_right(1);
                }
                (FailureKind::Error, lines)
            }
            SectionOutcome::GotNothing { expected } => {
                let expected = dedent(expected.trim_matches('\n'));
                (
                    FailureKind::Fail,
                    vec![format!("expected {expected:?} but got nothing")],
                )
            }
            SectionOutcome::Mismatch { expected, got } => {
                let expected = dedent(expected.trim_matches('\n'));
                let got = dedent(got.trim_matches('\n'));
                (
                    FailureKind::Fail,
                    vec![format!("expected {expected:?} but got {got:?}")],
                )
            }
        };

        FailureRecord {
            kind,
            file: self.file,
            line: self.line,
            lines,
        }
    }
}

/// Parse an aggregate doctest failure report
///
/// Returns a lazy, single-pass iterator over the report's sections, one
/// [`FailureRecord`] per failed example. The segment before the first divider
/// (the preamble) is discarded; its line numbers are never used.
#[must_use]
pub fn parse_report(report: &str) -> Sections<'_> {
    Sections {
        parts: DIVIDER_RE.split(report),
        seen_preamble: false,
        done: false,
    }
}

/// Lazy iterator over the sections of a doctest failure report
///
/// Yields one record per section. The first malformed section yields an error
/// and fuses the iterator; no partial recovery is attempted.
pub struct Sections<'h> {
    parts: regex::Split<'static, 'h>,
    seen_preamble: bool,
    done: bool,
}

impl Iterator for Sections<'_> {
    type Item = Result<FailureRecord, ReportError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let part = self.parts.next()?;
            if !self.seen_preamble {
                // Everything before the first divider is the preamble
                self.seen_preamble = true;
                continue;
            }
            if part.trim().is_empty() {
                continue;
            }
            return match parse_section(part) {
                Ok(section) => Some(Ok(section.into_record())),
                Err(err) => {
                    self.done = true;
                    Some(Err(err))
                }
            };
        }
    }
}

/// Extract the structured content of a single section
///
/// # Errors
///
/// Returns `ReportError::MalformedSection` if the section does not follow the
/// `File`/`Failed example`/outcome layout.
pub fn parse_section(section: &str) -> Result<DoctestSection, ReportError> {
    let mut lines = section.lines().skip_while(|l| l.trim().is_empty());

    let header = lines
        .next()
        .ok_or_else(|| malformed("missing section header", section))?;
    let caps = HEADER_RE
        .captures(header)
        .ok_or_else(|| malformed("expected `File \"...\", line N, in <function>`", header))?;
    let file = PathBuf::from(&caps["file"]);
    let line: u32 = caps["line"]
        .parse()
        .map_err(|_| malformed("line number out of range", header))?;
    let function = caps["function"].trim_end().to_string();

    match lines.next().map(str::trim_end) {
        Some("Failed example:") => {}
        other => {
            return Err(malformed(
                "expected `Failed example:`",
                other.unwrap_or_default(),
            ));
        }
    }
    let example = lines
        .next()
        .ok_or_else(|| malformed("missing example source line", section))?
        .trim()
        .to_string();

    let outcome = match lines.next().map(str::trim_end) {
        Some("Expected:") => {
            let mut expected: Vec<&str> = Vec::new();
            loop {
                match lines.next() {
                    Some(l) if l.trim_end() == "Got:" => {
                        let got: Vec<&str> = lines.by_ref().collect();
                        break SectionOutcome::Mismatch {
                            expected: expected.join("\n"),
                            got: got.join("\n"),
                        };
                    }
                    Some(l) if l.trim_end() == "Got nothing" => {
                        break SectionOutcome::GotNothing {
                            expected: expected.join("\n"),
                        };
                    }
                    Some(l) => expected.push(l),
                    None => {
                        return Err(malformed(
                            "expected block not followed by `Got:` or `Got nothing`",
                            section,
                        ));
                    }
                }
            }
        }
        Some("Exception raised:") => {
            let traceback: Vec<&str> = lines.by_ref().collect();
            SectionOutcome::Exception {
                traceback: traceback.join("\n"),
            }
        }
        other => {
            return Err(malformed(
                "expected `Expected:` or `Exception raised:`",
                other.unwrap_or_default(),
            ));
        }
    };

    Ok(DoctestSection {
        file,
        line,
        function,
        example,
        outcome,
    })
}

fn malformed(detail: &str, text: &str) -> ReportError {
    let snippet: String = text.trim().chars().take(80).collect();
    ReportError::MalformedSection {
        detail: format!("{detail} (near {snippet:?})"),
    }
}

/// Strip the common leading whitespace from every line
fn dedent(text: &str) -> String {
    let indent = text
        .lines()
        .filter(|l| !l.trim().is_empty())
        .map(|l| l.len() - l.trim_start().len())
        .min()
        .unwrap_or(0);
    text.lines()
        .map(|l| l.get(indent..).unwrap_or_default())
        .collect::<Vec<_>>()
        .join("\n")
}
