// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for machineout-report

use thiserror::Error;

/// Errors that can occur while formatting failure reports
#[derive(Debug, Error)]
pub enum ReportError {
    /// A traceback with zero frames was passed to the frame selector
    #[error("empty traceback: frame selection requires at least one frame")]
    EmptyTraceback,

    /// A doctest report section did not match the expected layout
    #[error("malformed doctest section: {detail}")]
    MalformedSection {
        /// Description of the layout violation, with the offending text
        detail: String,
    },

    /// Error writing to the output sink
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
