//! Configuration for the machineout CLI
//!
//! This module provides the command-line configuration: the project root used
//! for path relativization and frame scoring, the input mode, and logging
//! options.

use std::path::PathBuf;

use clap::Parser;

/// Machineout - machine-readable test-failure output for editors and IDEs
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "machineout")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Project root directory
    ///
    /// Frames inside this tree score higher during frame selection, and file
    /// paths under it are emitted project-relative. Defaults to the current
    /// working directory.
    #[arg(short, long, env = "MACHINEOUT_ROOT")]
    pub root: Option<PathBuf>,

    /// Treat stdin as one raw doctest failure report
    ///
    /// Without this flag, stdin is read as newline-delimited JSON failure
    /// events, one event per line.
    #[arg(long, default_value = "false")]
    pub doctest: bool,

    /// Enable verbose logging (debug level)
    ///
    /// Logs are written to stderr so stdout stays reserved for the
    /// machine-parsable output lines.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Get the project root, using the current directory as default
    #[must_use]
    pub fn project_root(&self) -> PathBuf {
        self.root
            .clone()
            .or_else(|| std::env::current_dir().ok())
            .unwrap_or_else(|| PathBuf::from("."))
    }

    /// Validate the configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the root path is specified but doesn't exist or is
    /// not a directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(ref root) = self.root {
            if !root.exists() {
                return Err(ConfigError::RootNotFound(root.clone()));
            }
            if !root.is_dir() {
                return Err(ConfigError::RootNotDirectory(root.clone()));
            }
        }
        Ok(())
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Root path not found
    #[error("Project root not found: {0}")]
    RootNotFound(PathBuf),

    /// Root path is not a directory
    #[error("Project root is not a directory: {0}")]
    RootNotDirectory(PathBuf),
}
