// SPDX-License-Identifier: Apache-2.0
// Copyright (c) 2026 Licenser Contributors

use std::path::{Path, PathBuf};

use cu::pre::*;

/// Files found under a root path
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Candidates {
    /// Regular files, in walk order
    pub files: Vec<PathBuf>,
    /// Paths that could not be read, with the cause
    pub errors: Vec<(PathBuf, String)>,
}

/// Collect the files to process under `root`.
///
/// Without `recurse`, `root` must be a regular file. With `recurse`, every
/// regular file under `root` is returned, sorted by file name within each
/// directory. Symbolic links are never followed.
pub fn collect_files(root: &Path, recurse: bool) -> cu::Result<Candidates> {
    let metadata = std::fs::symlink_metadata(root)
        .with_context(|| format!("cannot access '{}'", root.display()))?;

    if !recurse {
        if metadata.is_dir() {
            cu::bail!(
                "'{}' is a directory, use --recurse to process it",
                root.display()
            );
        }
        if !metadata.is_file() {
            cu::bail!("'{}' is not a regular file", root.display());
        }
        return Ok(Candidates {
            files: vec![root.to_path_buf()],
            errors: vec![],
        });
    }

    let mut candidates = Candidates::default();
    let walker = walkdir::WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name();
    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                let path = e.path().unwrap_or(root).to_path_buf();
                cu::warn!("skipping '{}': {e}", path.display());
                candidates.errors.push((path, e.to_string()));
                continue;
            }
        };
        if entry.file_type().is_file() {
            candidates.files.push(entry.into_path());
        } else if entry.file_type().is_symlink() {
            cu::debug!("not following symlink '{}'", entry.path().display());
        }
    }
    cu::debug!(
        "found {} files under '{}'",
        candidates.files.len(),
        root.display()
    );
    Ok(candidates)
}
