// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Read-only queries against the primary repository, via gix.

use crate::error::{GitError, ShadowResult};
use std::path::Path;
use which::which;

use super::backend::{GitQuery, GixBackend};

/// Check if path is inside a git work tree.
#[must_use]
pub fn is_git_repo(path: &Path) -> bool {
    GixBackend::is_git_repo(path)
}

/// Current branch of the primary repository (None when detached).
///
/// # Errors
///
/// Returns a `GitError` if repository discovery or head resolution fails.
pub fn current_branch(path: &Path) -> ShadowResult<Option<String>> {
    GixBackend::current_branch(path)
}

/// Current branch, failing with a descriptive error when HEAD is detached.
///
/// # Errors
///
/// Returns `GitError::DetachedHead` when no branch is checked out, or a
/// `GitError` if the query itself fails.
pub fn current_branch_required(path: &Path) -> ShadowResult<String> {
    current_branch(path)?.ok_or_else(|| {
        GitError::DetachedHead {
            path: path.display().to_string(),
        }
        .into()
    })
}

/// Fetch URL of the named remote, if configured.
///
/// # Errors
///
/// Returns a `GitError` if repository discovery fails.
pub fn remote_url(path: &Path, remote: &str) -> ShadowResult<Option<String>> {
    GixBackend::remote_url(path, remote)
}

/// Root of the work tree containing `path`, if any.
///
/// Lets commands run from any subdirectory of the primary repository while
/// keeping registry entries relative to its root.
#[must_use]
pub fn work_tree_root(path: &Path) -> Option<std::path::PathBuf> {
    gix::discover(path)
        .ok()
        .and_then(|repo| repo.workdir().map(Path::to_path_buf))
}

/// Verify the git binary is reachable before any shell operation.
///
/// # Errors
///
/// Returns `GitError::GitNotFound` if `git` is not on PATH.
pub fn ensure_git_available() -> ShadowResult<()> {
    which("git").map_err(|_| GitError::GitNotFound)?;
    Ok(())
}
