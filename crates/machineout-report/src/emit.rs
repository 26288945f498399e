// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Machine-parsable line emission
//!
//! Formats a [`FailureRecord`] into the one-line-per-failure protocol:
//!
//! ```text
//! <path>:<line>: <kind>: <headline>
//! <path>:<line>: <pad> <continuation>
//! ```
//!
//! Paths under the project root are emitted project-relative; continuation
//! lines are padded so their text aligns under the headline text rather than
//! under the kind label. The output destination is an injected [`io::Write`]
//! sink, never a hidden global stream.

use std::io;
use std::path::{Path, PathBuf};

use crate::record::FailureRecord;

/// Renders failure records into output lines
#[derive(Debug, Clone)]
pub struct LineEmitter {
    project_root: PathBuf,
}

impl LineEmitter {
    /// Create an emitter that relativizes paths against the given root
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// Strip the project-root prefix from a file path, if present
    ///
    /// Files outside the project tree keep their absolute path.
    #[must_use]
    pub fn relativize<'a>(&self, file: &'a Path) -> &'a Path {
        file.strip_prefix(&self.project_root).unwrap_or(file)
    }

    /// Render a record into its output lines
    ///
    /// An empty message list renders to no lines at all.
    #[must_use]
    pub fn render(&self, record: &FailureRecord) -> Vec<String> {
        let Some(headline) = record.lines.first() else {
            return Vec::new();
        };

        let file = self.relativize(&record.file);
        let prefix = format!("{}:{}", file.display(), record.line);

        let mut out = Vec::with_capacity(record.lines.len());
        out.push(format!("{}: {}: {}", prefix, record.kind, headline));

        // Continuations align under the headline text, not the kind label
        let pad = " ".repeat(record.kind.as_str().len() + 1);
        for line in &record.lines[1..] {
            out.push(format!("{prefix}: {pad} {line}"));
        }
        out
    }

    /// Write a record's rendered lines to the sink
    ///
    /// # Errors
    ///
    /// Returns any error from the underlying writer.
    pub fn write_record<W: io::Write>(
        &self,
        sink: &mut W,
        record: &FailureRecord,
    ) -> io::Result<()> {
        for line in self.render(record) {
            writeln!(sink, "{line}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::FailureKind;
    use similar_asserts::assert_eq;

    fn record(kind: FailureKind, file: &str, line: u32, lines: &[&str]) -> FailureRecord {
        FailureRecord::new(kind, file, line, lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn test_render_single_line() {
        let emitter = LineEmitter::new("/project");
        let rec = record(
            FailureKind::Fail,
            "/project/tests/test_app.rs",
            12,
            &["assertion failed"],
        );
        assert_eq!(
            emitter.render(&rec),
            vec!["tests/test_app.rs:12: fail: assertion failed"]
        );
    }

    #[test]
    fn test_render_continuation_padding() {
        let emitter = LineEmitter::new("/project");
        let rec = record(
            FailureKind::Error,
            "/project/src/app.rs",
            3,
            &["ValueError: bad input", "while parsing config"],
        );
        // "error" is five characters; continuations get five spaces of pad
        // plus the separating space so text aligns under the headline.
        assert_eq!(
            emitter.render(&rec),
            vec![
                "src/app.rs:3: error: ValueError: bad input",
                "src/app.rs:3:        while parsing config",
            ]
        );
    }

    #[test]
    fn test_file_outside_root_stays_absolute() {
        let emitter = LineEmitter::new("/project");
        let rec = record(FailureKind::Fail, "/usr/lib/helper.rs", 8, &["boom"]);
        assert_eq!(emitter.render(&rec), vec!["/usr/lib/helper.rs:8: fail: boom"]);
    }

    #[test]
    fn test_relativize_round_trip() {
        let emitter = LineEmitter::new("/project");
        let original = Path::new("/project/src/deep/module.rs");
        let relative = emitter.relativize(original);
        assert_eq!(relative, Path::new("src/deep/module.rs"));
        assert_eq!(Path::new("/project").join(relative), original);
    }

    #[test]
    fn test_empty_message_renders_nothing() {
        let emitter = LineEmitter::new("/project");
        let rec = record(FailureKind::Error, "/project/a.rs", 1, &[]);
        assert!(emitter.render(&rec).is_empty());

        let mut sink = Vec::new();
        emitter
            .write_record(&mut sink, &rec)
            .expect("Should write nothing");
        assert!(sink.is_empty());
    }

    #[test]
    fn test_write_record_terminates_lines() {
        let emitter = LineEmitter::new("/project");
        let rec = record(FailureKind::Fail, "/project/a.rs", 1, &["x", "y"]);

        let mut sink = Vec::new();
        emitter.write_record(&mut sink, &rec).expect("Should write");
        let text = String::from_utf8(sink).expect("utf8");
        assert_eq!(text, "a.rs:1: fail: x\na.rs:1:       y\n");
    }
}
