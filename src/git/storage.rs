// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Storage Repository Adapter.
//!
//! ```text
//! storage.rs --> ShellBackend --> git CLI
//! ```
//!
//! Every operation is scoped by an explicit repository path. Composite
//! operations (`ensure_branch`, `commit_all`) layer the save/restore
//! semantics on top of the raw backend calls.

use crate::error::ShadowResult;
use std::path::Path;

use super::backend::{ShellBackend, StorageMutation, StorageQuery};

/// Outcome of a stage-all-and-commit-if-dirty operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitOutcome {
    /// A commit was created.
    Committed,
    /// The work tree matched HEAD; nothing was committed.
    NoChanges,
}

/// Check if path is a git repository.
#[must_use]
pub fn is_repo(path: &Path) -> bool {
    <ShellBackend as StorageQuery>::is_git_repo(path)
}

/// Initialize a new repository with the given initial branch.
///
/// # Errors
///
/// Returns a `GitError` if repository initialization fails.
pub fn init_repo(path: &Path, initial_branch: &str) -> ShadowResult<()> {
    ShellBackend::init_repo(path, initial_branch)
}

/// Current branch of the storage repository (None when detached).
///
/// # Errors
///
/// Returns a `GitError` if the query fails.
pub fn current_branch(path: &Path) -> ShadowResult<Option<String>> {
    <ShellBackend as StorageQuery>::current_branch(path)
}

/// List local branch names.
///
/// # Errors
///
/// Returns a `GitError` if the query fails.
pub fn branches(path: &Path) -> ShadowResult<Vec<String>> {
    <ShellBackend as StorageQuery>::branches(path)
}

/// Whether `branch` exists locally.
///
/// # Errors
///
/// Returns a `GitError` if the branch listing fails.
pub fn branch_exists(path: &Path, branch: &str) -> ShadowResult<bool> {
    Ok(branches(path)?.iter().any(|b| b == branch))
}

/// Create `branch` from `base` if it does not already exist.
///
/// # Errors
///
/// Returns a `GitError` if branch creation fails.
pub fn ensure_branch(path: &Path, branch: &str, base: &str) -> ShadowResult<()> {
    if !branch_exists(path, branch)? {
        ShellBackend::create_branch(path, branch, base)?;
    }
    Ok(())
}

/// Checkout a branch, tag, or commit.
///
/// # Errors
///
/// Returns a `GitError` if the checkout operation fails.
pub fn checkout(path: &Path, what: &str) -> ShadowResult<()> {
    ShellBackend::checkout(path, what)
}

/// Checkout a single file's content from `refname` into the work tree.
///
/// # Errors
///
/// Returns a `GitError` if the ref or file does not exist.
pub fn checkout_file_from(path: &Path, refname: &str, file: &str) -> ShadowResult<()> {
    ShellBackend::checkout_file_from(path, refname, file)
}

/// Stage everything and commit if there is a net diff.
///
/// A clean tree is reported as [`CommitOutcome::NoChanges`], never as an
/// error.
///
/// # Errors
///
/// Returns a `GitError` if staging or the commit itself fails.
pub fn commit_all(path: &Path, message: &str) -> ShadowResult<CommitOutcome> {
    ShellBackend::stage_all(path)?;
    if !<ShellBackend as StorageQuery>::has_staged_changes(path)? {
        return Ok(CommitOutcome::NoChanges);
    }
    ShellBackend::commit(path, message)?;
    Ok(CommitOutcome::Committed)
}

/// Remove a file from the index and work tree, tolerating absence.
///
/// # Errors
///
/// Returns a `GitError` on any failure other than a missing file.
pub fn remove_file(path: &Path, file: &str) -> ShadowResult<()> {
    ShellBackend::remove_file(path, file)
}

/// One-line commit history, optionally limited to a single file.
///
/// # Errors
///
/// Returns a `GitError` if the query fails.
pub fn log(path: &Path, file: Option<&str>, count: usize) -> ShadowResult<String> {
    <ShellBackend as StorageQuery>::log(path, file, count)
}

/// Unified diff: work tree vs HEAD, or between two refs.
///
/// # Errors
///
/// Returns a `GitError` if the query fails.
pub fn diff(path: &Path, refs: Option<(&str, &str)>) -> ShadowResult<String> {
    <ShellBackend as StorageQuery>::diff(path, refs)
}

/// Raw bytes of `file` at `refname`.
///
/// # Errors
///
/// Returns a `GitError` if the ref or file does not exist.
pub fn show_file(path: &Path, refname: &str, file: &str) -> ShadowResult<Vec<u8>> {
    <ShellBackend as StorageQuery>::show_file(path, refname, file)
}

/// Add a remote.
///
/// # Errors
///
/// Returns a `GitError` if the remote cannot be added.
pub fn add_remote(path: &Path, name: &str, url: &str) -> ShadowResult<()> {
    ShellBackend::add_remote(path, name, url)
}

/// Remove a remote.
///
/// # Errors
///
/// Returns a `GitError` if the remote cannot be removed.
pub fn remove_remote(path: &Path, name: &str) -> ShadowResult<()> {
    ShellBackend::remove_remote(path, name)
}

/// `git remote -v` listing.
///
/// # Errors
///
/// Returns a `GitError` if the query fails.
pub fn remotes(path: &Path) -> ShadowResult<String> {
    <ShellBackend as StorageQuery>::remotes(path)
}

/// Push all branches to a remote.
///
/// # Errors
///
/// Returns a `GitError` if the push fails.
pub fn push_all(path: &Path, remote: &str) -> ShadowResult<()> {
    ShellBackend::push_all(path, remote)
}

/// Pull the given branch from a remote.
///
/// # Errors
///
/// Returns a `GitError` if the pull fails.
pub fn pull(path: &Path, remote: &str, branch: &str) -> ShadowResult<()> {
    ShellBackend::pull(path, remote, branch)
}

/// Aggressively garbage-collect the repository.
///
/// # Errors
///
/// Returns a `GitError` if garbage collection fails.
pub fn gc_aggressive(path: &Path) -> ShadowResult<()> {
    ShellBackend::gc_aggressive(path)
}
