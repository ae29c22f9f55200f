// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use std::io::Write as _;
use std::path::{Path, PathBuf};

use cu::pre::*;

use crate::{CommentStyle, Config, License, collect_files};

/// What to do with each file
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Report files without a license header
    Check,
    /// Insert the license header into files without one
    Apply,
}

/// Result of processing all the files
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Report {
    /// Number of files that were processed
    pub total: usize,
    /// Files without a license header (check mode)
    pub missing: Vec<PathBuf>,
    /// Files that had the header inserted (apply mode)
    pub modified: Vec<PathBuf>,
    /// Files that could not be processed, with the cause
    pub errors: Vec<(PathBuf, String)>,
}

impl Report {
    pub fn is_success(&self) -> bool {
        self.missing.is_empty() && self.errors.is_empty()
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for path in &self.missing {
            writeln!(f, "missing license: {}", path.display())?;
        }
        for path in &self.modified {
            writeln!(f, "modified: {}", path.display())?;
        }
        for (path, e) in &self.errors {
            writeln!(f, "error: {}: {e}", path.display())?;
        }
        Ok(())
    }
}

const NO_STYLE_ERROR: &str =
    "no comment style for this file extension, add one with --style <extension>:<style>";

/// Run the tool for the given config.
///
/// Errors on individual files are collected in the report. `Err` is only
/// returned when the files to process cannot be determined.
pub fn run(config: &Config, mode: Mode) -> cu::Result<Report> {
    let candidates = collect_files(&config.path, config.recurse)?;

    let bar = cu::progress_unbounded_lowp(match mode {
        Mode::Check => "checking files",
        Mode::Apply => "applying license",
    });
    bar.set_total(candidates.files.len());

    let mut report = Report {
        errors: candidates.errors,
        ..Default::default()
    };

    for (count, path) in candidates.files.into_iter().enumerate() {
        cu::progress!(&bar, count + 1, "{}", path.display());
        report.total += 1;
        match mode {
            Mode::Check => match check_file(&path, &config.license) {
                Ok(true) => {}
                Ok(false) => {
                    cu::debug!("'{}': missing license header", path.display());
                    report.missing.push(path);
                }
                Err(e) => {
                    cu::debug!("failed to check '{}': {e}", path.display());
                    report.errors.push((path, format!("{e:#}")));
                }
            },
            Mode::Apply => {
                let Some(style) = config.styles.style_for_path(&path) else {
                    if let Ok(true) = check_file(&path, &config.license) {
                        cu::trace!("'{}' already has a license header", path.display());
                        continue;
                    }
                    cu::warn!("no comment style for '{}'", path.display());
                    report.errors.push((path, NO_STYLE_ERROR.to_string()));
                    continue;
                };
                match apply_file(&path, &config.license, style) {
                    Ok(true) => {
                        cu::debug!("added license header to '{}'", path.display());
                        report.modified.push(path);
                    }
                    Ok(false) => {
                        cu::trace!("'{}' already has a license header", path.display());
                    }
                    Err(e) => {
                        cu::debug!("failed to apply license to '{}': {e}", path.display());
                        report.errors.push((path, format!("{e:#}")));
                    }
                }
            }
        }
    }

    print_summary(&report, mode);
    Ok(report)
}

fn print_summary(report: &Report, mode: Mode) {
    let total = report.total;
    if !report.errors.is_empty() {
        for (path, e) in &report.errors {
            cu::error!("- {}: {e}", path.display());
        }
        cu::error!("got {} error(s), see above", report.errors.len());
    }
    match mode {
        Mode::Check => {
            if report.missing.is_empty() {
                cu::info!("license check successful for {total} files.");
                return;
            }
            for path in &report.missing {
                cu::error!("- {}", path.display());
            }
            cu::error!(
                "checked {total} files, {} missing a license header.",
                report.missing.len()
            );
            cu::hint!("run the apply command to add them.");
        }
        Mode::Apply => {
            for path in &report.modified {
                cu::info!("- {}", path.display());
            }
            cu::info!(
                "added license header to {} of {total} files.",
                report.modified.len()
            );
        }
    }
}

/// Check if the file has the license header
pub fn check_file(path: &Path, license: &License) -> cu::Result<bool> {
    let reader = cu::fs::reader(path)?;
    license.is_present(reader)
}

/// Insert the license header at the top of the file, unless it
/// already has one. Return if the file was changed.
///
/// The new content is written to a temporary file next to `path`
/// and then renamed over it, so `path` is never left half written.
pub fn apply_file(path: &Path, license: &License, style: CommentStyle) -> cu::Result<bool> {
    let content =
        std::fs::read(path).with_context(|| format!("failed to read '{}'", path.display()))?;
    if license.is_present(content.as_slice())? {
        return Ok(false);
    }
    let header = license.header(style);

    let parent = match path.parent() {
        Some(x) if !x.as_os_str().is_empty() => x,
        _ => Path::new("."),
    };
    let permissions = std::fs::metadata(path)
        .with_context(|| format!("failed to read metadata of '{}'", path.display()))?
        .permissions();
    let mut temp = tempfile::NamedTempFile::new_in(parent)
        .with_context(|| format!("failed to create temporary file in '{}'", parent.display()))?;
    temp.write_all(header.as_bytes())
        .context("failed to write temporary file")?;
    temp.write_all(&content)
        .context("failed to write temporary file")?;
    temp.as_file()
        .sync_all()
        .context("failed to flush temporary file")?;
    temp.as_file()
        .set_permissions(permissions)
        .context("failed to set permissions on temporary file")?;
    temp.persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace '{}'", path.display()))?;
    Ok(true)
}
