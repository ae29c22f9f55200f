// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

//! Detect and insert license headers in source files.

mod config;
pub use config::*;
mod license;
pub use license::*;
mod style;
pub use style::*;
mod walk;
pub use walk::*;

mod runner;
pub use runner::*;

#[cfg(feature = "cli")]
mod cli;
#[cfg(feature = "cli")]
pub use cli::*;
