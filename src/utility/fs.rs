// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Filesystem helpers: mirrored copies and directory expansion.

use crate::error::Result;
use anyhow::Context;
use ignore::WalkBuilder;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Copies `src` to `dst`, creating intermediate directories as needed.
///
/// # Errors
///
/// Returns an error if the parent directory cannot be created or the copy
/// itself fails.
pub fn copy_creating_dirs(src: &Path, dst: &Path) -> Result<()> {
    if let Some(parent) = dst.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create directory {}", parent.display()))?;
    }
    std::fs::copy(src, dst)
        .with_context(|| format!("failed to copy {} to {}", src.display(), dst.display()))?;
    Ok(())
}

/// Recursively lists every file under `dir`, sorted for determinism.
///
/// Hidden files are included and ignore files are NOT respected: shadowed
/// files are typically exactly the ones listed in `.gitignore`. `.git`
/// directories are skipped. Entries the walker cannot read are skipped with
/// a warning (best-effort expansion).
///
/// # Errors
///
/// Returns an error if `dir` is not a directory.
pub fn expand_dir_files(dir: &Path) -> Result<Vec<PathBuf>> {
    anyhow::ensure!(dir.is_dir(), "not a directory: {}", dir.display());

    let walker = WalkBuilder::new(dir)
        .hidden(false)
        .ignore(false)
        .parents(false)
        .git_ignore(false)
        .git_global(false)
        .git_exclude(false)
        .filter_entry(|entry| entry.file_name() != ".git")
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                if entry.file_type().is_some_and(|t| t.is_file()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => warn!(error = %e, "skipping unreadable entry"),
        }
    }
    files.sort();
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn copy_creates_intermediate_dirs() {
        let temp = tempfile::tempdir().unwrap();
        let src = temp.path().join("src.txt");
        fs::write(&src, b"payload").unwrap();

        let dst = temp.path().join("a/b/c/dst.txt");
        copy_creating_dirs(&src, &dst).unwrap();

        assert_eq!(fs::read(&dst).unwrap(), b"payload");
    }

    #[test]
    fn expand_includes_hidden_skips_git_dir() {
        let temp = tempfile::tempdir().unwrap();
        fs::write(temp.path().join(".env"), "A=1").unwrap();
        fs::create_dir_all(temp.path().join("sub")).unwrap();
        fs::write(temp.path().join("sub/conf"), "x").unwrap();
        fs::create_dir_all(temp.path().join(".git")).unwrap();
        fs::write(temp.path().join(".git/HEAD"), "ref").unwrap();

        let files = expand_dir_files(temp.path()).unwrap();
        let names: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(temp.path()).unwrap().to_string_lossy().into_owned())
            .collect();
        assert_eq!(names, vec![".env", "sub/conf"]);
    }

    #[test]
    fn expand_rejects_file_argument() {
        let temp = tempfile::tempdir().unwrap();
        let file = temp.path().join("plain.txt");
        fs::write(&file, "x").unwrap();
        assert!(expand_dir_files(&file).is_err());
    }
}
