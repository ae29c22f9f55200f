// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use std::path::PathBuf;
use std::sync::LazyLock;

use crate::{License, StyleRegistry};

/// Everything a run needs, built once before any file is touched
#[derive(Debug, Clone)]
pub struct Config {
    /// The license to check for or apply
    pub license: License,
    /// File or directory to process
    pub path: PathBuf,
    /// Process every file under `path`
    pub recurse: bool,
    /// Comment styles, including overrides
    pub styles: StyleRegistry,
}

impl Config {
    pub fn new(
        license: License,
        path: impl Into<PathBuf>,
        recurse: bool,
        styles: StyleRegistry,
    ) -> Self {
        Self {
            license,
            path: path.into(),
            recurse,
            styles,
        }
    }
}

/// The current year in local time
pub fn current_year() -> i32 {
    static YEAR: LazyLock<i32> = LazyLock::new(|| {
        use chrono::Datelike;
        let y = chrono::Local::now().year();
        cu::debug!("current year is {y}");
        y
    });
    *YEAR
}
