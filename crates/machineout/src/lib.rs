// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! machineout library
//!
//! This module exports the core functionality of machineout for use in
//! integration tests and as a library.

pub mod config;
pub mod event;
pub mod formatter;
pub mod stream;
