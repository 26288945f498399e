// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Stack frame model and best-frame selection
//!
//! Given the ordered frames of a captured traceback (outermost first), the
//! selector picks the single frame most useful to point a developer at:
//! frames inside the project tree beat framework internals, test files beat
//! helpers, and generic `assert*` helper frames are demoted so the failure
//! points at the calling test instead.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::trace;

use crate::error::ReportError;

/// Sum of all scoring weights; update when new criteria are added
const MAX_SCORE: f64 = 7.0;

/// One call-site entry of a captured stack trace
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StackFrame {
    /// Source file the frame executes in
    pub file: PathBuf,
    /// Line number within the file
    pub line: u32,
    /// Name of the enclosing function
    pub function: String,
    /// Source text of the executing line
    #[serde(default)]
    pub source: String,
}

impl StackFrame {
    /// Build a frame from its parts
    #[must_use]
    pub fn new(
        file: impl Into<PathBuf>,
        line: u32,
        function: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            file: file.into(),
            line,
            function: function.into(),
            source: source.into(),
        }
    }
}

/// Picks the most developer-relevant frame out of a traceback
///
/// The project root is fixed at construction; scoring is a pure function of
/// each frame's file path and function name.
#[derive(Debug, Clone)]
pub struct FrameSelector {
    project_root: PathBuf,
}

impl FrameSelector {
    /// Create a selector rooted at the given project directory
    #[must_use]
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    /// The project root this selector scores against
    #[must_use]
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Score a frame as a quality indicator in `[0, 1]`
    ///
    /// Weights: 4/7 for a file under the project root, 2/7 for a base name
    /// containing `test`, 1/7 for a function name that does not start with
    /// `assert`. The `assert` check lets users extend their test harness with
    /// custom assert-methods while still getting the calling test's line.
    #[must_use]
    pub fn score(&self, frame: &StackFrame) -> f64 {
        let mut score = 0.0;

        if frame.file.starts_with(&self.project_root) {
            score += 4.0;
        }

        let in_test_file = frame
            .file
            .file_name()
            .is_some_and(|name| name.to_string_lossy().contains("test"));
        if in_test_file {
            score += 2.0;
        }

        if !frame.function.starts_with("assert") {
            score += 1.0;
        }

        score / MAX_SCORE
    }

    /// Select the best frame of a non-empty traceback
    ///
    /// Walks the frames in call order keeping a running best, initialized to
    /// the last (innermost) frame as fallback. The walk terminates at the
    /// first frame scoring at least one criterion (1/7); later frames are
    /// never considered, even if they would score higher.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyTraceback` if `frames` is empty.
    pub fn select<'a>(&self, frames: &'a [StackFrame]) -> Result<&'a StackFrame, ReportError> {
        let mut best = frames.last().ok_or(ReportError::EmptyTraceback)?;
        let mut best_score = 0.0;

        for frame in frames {
            let curr_score = self.score(frame);
            if curr_score > best_score {
                best = frame;
                best_score = curr_score;

                // Terminate the walk as soon as possible
                if best_score >= 1.0 / MAX_SCORE {
                    break;
                }
            }
        }

        trace!(
            file = %best.file.display(),
            line = best.line,
            score = best_score,
            "selected stack frame"
        );
        Ok(best)
    }
}
