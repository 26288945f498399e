// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! machineout: machine-readable test-failure output for editor integration
//!
//! This binary reads test-failure data from stdin and writes one normalized
//! `<path>:<line>: <kind>: <message>` line group per failure to stdout, for
//! line-oriented consumption by editors and IDEs.

use std::io;

use anyhow::Context;
use clap::Parser;
use tracing::debug;

use machineout::config::Config;
use machineout::stream;

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries only the output protocol
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(io::stderr)
        .init();

    config.validate().context("invalid configuration")?;
    let root = config.project_root();
    debug!(root = %root.display(), doctest = config.doctest, "starting");

    let stdin = io::stdin().lock();
    let stdout = io::stdout().lock();

    if config.doctest {
        stream::process_report(stdin, stdout, &root).context("failed to process doctest report")?;
    } else {
        stream::process_events(stdin, stdout, &root).context("failed to process failure events")?;
    }

    Ok(())
}
