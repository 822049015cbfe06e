// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git backend abstraction layer.
//!
//! ```text
//! GitQuery (primary repo, read) --> GixBackend (pure Rust gix)
//! StorageMutation / StorageQuery (storage repo) --> ShellBackend (git CLI)
//! ```

use crate::error::{GitError, GixError, ShadowResult};
use std::path::Path;

// --- Query Trait (primary repository, read-only) ---

/// Read-only queries against the primary repository.
pub trait GitQuery {
    /// Check if path is inside a git work tree.
    fn is_git_repo(path: &Path) -> bool;

    /// Get current branch name (None if HEAD is detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery or head resolution fails.
    fn current_branch(path: &Path) -> ShadowResult<Option<String>>;

    /// Get the fetch URL of the named remote, if configured.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository discovery fails.
    fn remote_url(path: &Path, remote: &str) -> ShadowResult<Option<String>>;
}

// --- Storage Traits (storage repository) ---

/// Mutations against a storage repository. All operations take the
/// repository path explicitly so they are safe to call from any cwd.
pub trait StorageMutation {
    /// Initialize a new repository with the given initial branch.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if repository initialization fails.
    fn init_repo(path: &Path, initial_branch: &str) -> ShadowResult<()>;

    /// Create `branch` pointing at `base` without checking it out.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if branch creation fails.
    fn create_branch(path: &Path, branch: &str, base: &str) -> ShadowResult<()>;

    /// Checkout a branch, tag, or commit.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the checkout operation fails.
    fn checkout(path: &Path, what: &str) -> ShadowResult<()>;

    /// Checkout a single file's content from `refname` into the work tree.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the ref or file does not exist.
    fn checkout_file_from(path: &Path, refname: &str, file: &str) -> ShadowResult<()>;

    /// Stage every change in the work tree (`git add -A`).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if staging fails.
    fn stage_all(path: &Path) -> ShadowResult<()>;

    /// Commit the staged changes.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the commit fails. Call sites must check for
    /// staged changes first; committing an empty index is an error here.
    fn commit(path: &Path, message: &str) -> ShadowResult<()>;

    /// Remove a file from the index and work tree, tolerating absence.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` on any failure other than a missing file.
    fn remove_file(path: &Path, file: &str) -> ShadowResult<()>;

    /// Add a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote cannot be added.
    fn add_remote(path: &Path, name: &str, url: &str) -> ShadowResult<()>;

    /// Remove a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the remote cannot be removed.
    fn remove_remote(path: &Path, name: &str) -> ShadowResult<()>;

    /// Push all branches to a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the push fails.
    fn push_all(path: &Path, remote: &str) -> ShadowResult<()>;

    /// Pull the given branch from a remote.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the pull fails.
    fn pull(path: &Path, remote: &str, branch: &str) -> ShadowResult<()>;

    /// Aggressively garbage-collect the repository.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if garbage collection fails.
    fn gc_aggressive(path: &Path) -> ShadowResult<()>;
}

/// Read-only queries against a storage repository.
pub trait StorageQuery {
    /// Check if path is a git repository.
    fn is_git_repo(path: &Path) -> bool;

    /// Current branch of the storage repository (None when detached).
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the query fails.
    fn current_branch(path: &Path) -> ShadowResult<Option<String>>;

    /// List local branch names.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the query fails.
    fn branches(path: &Path) -> ShadowResult<Vec<String>>;

    /// Whether anything is staged relative to HEAD.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the query fails.
    fn has_staged_changes(path: &Path) -> ShadowResult<bool>;

    /// One-line commit history, optionally limited to a single file.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the query fails.
    fn log(path: &Path, file: Option<&str>, count: usize) -> ShadowResult<String>;

    /// Unified diff: work tree vs HEAD, or between two refs.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the query fails.
    fn diff(path: &Path, refs: Option<(&str, &str)>) -> ShadowResult<String>;

    /// Raw bytes of `file` at `refname`.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the ref or file does not exist.
    fn show_file(path: &Path, refname: &str, file: &str) -> ShadowResult<Vec<u8>>;

    /// `git remote -v` listing.
    ///
    /// # Errors
    ///
    /// Returns a `GitError` if the query fails.
    fn remotes(path: &Path) -> ShadowResult<String>;
}

// --- GixBackend Implementation (Pure Rust) ---

/// Pure Rust git backend using gix.
///
/// Provides efficient read-only operations on the primary repository
/// without spawning subprocesses.
pub struct GixBackend;

impl GitQuery for GixBackend {
    fn is_git_repo(path: &Path) -> bool {
        gix::discover(path).is_ok()
    }

    fn current_branch(path: &Path) -> ShadowResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let head = repo
            .head_name()
            .map_err(|e| GitError::Gix(GixError::Head(e)))?;
        Ok(head.map(|name| name.shorten().to_string()))
    }

    fn remote_url(path: &Path, remote: &str) -> ShadowResult<Option<String>> {
        let repo =
            gix::discover(path).map_err(|e| GitError::Gix(GixError::Discover(Box::new(e))))?;
        let key = format!("remote.{remote}.url");
        let url = repo
            .config_snapshot()
            .string(key.as_str())
            .map(|v| v.to_string());
        Ok(url)
    }
}

// --- ShellBackend Implementation (Git CLI) ---

/// Shell-based git backend using the git CLI.
///
/// All mutations of the storage repository go through here; the storage
/// repo's history is plain git, inspectable with stock tooling.
pub struct ShellBackend;

impl ShellBackend {
    /// Execute a git command and return trimmed stdout.
    /// ALWAYS sets `GCM_INTERACTIVE=never` and `GIT_TERMINAL_PROMPT=0`.
    pub(crate) fn git_command(args: &[&str], cwd: &Path) -> ShadowResult<String> {
        let output = Self::git_output(args, cwd)?;
        Ok(String::from_utf8_lossy(&output).trim().to_string())
    }

    /// Execute a git command and return raw stdout bytes (no trimming).
    /// Used for file content, which must round-trip byte-for-byte.
    pub(crate) fn git_command_bytes(args: &[&str], cwd: &Path) -> ShadowResult<Vec<u8>> {
        Self::git_output(args, cwd)
    }

    fn git_output(args: &[&str], cwd: &Path) -> ShadowResult<Vec<u8>> {
        use std::process::Command;

        let output = Command::new("git")
            .args(args)
            .current_dir(cwd)
            .env("GCM_INTERACTIVE", "never")
            .env("GIT_TERMINAL_PROMPT", "0")
            .output()
            .map_err(|e| GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: format!("failed to execute git: {e}"),
            })?;

        if !output.status.success() {
            return Err(GitError::CommandFailed {
                command: format!("git {}", args.join(" ")),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }
        Ok(output.stdout)
    }
}

impl StorageMutation for ShellBackend {
    fn init_repo(path: &Path, initial_branch: &str) -> ShadowResult<()> {
        let branch_arg = format!("--initial-branch={initial_branch}");
        Self::git_command(&["init", "--quiet", &branch_arg], path)?;
        Ok(())
    }

    fn create_branch(path: &Path, branch: &str, base: &str) -> ShadowResult<()> {
        Self::git_command(&["branch", branch, base], path)?;
        Ok(())
    }

    fn checkout(path: &Path, what: &str) -> ShadowResult<()> {
        Self::git_command(
            &["-c", "advice.detachedHead=false", "checkout", "-q", what],
            path,
        )?;
        Ok(())
    }

    fn checkout_file_from(path: &Path, refname: &str, file: &str) -> ShadowResult<()> {
        Self::git_command(&["checkout", "-q", refname, "--", file], path)?;
        Ok(())
    }

    fn stage_all(path: &Path) -> ShadowResult<()> {
        Self::git_command(&["add", "-A"], path)?;
        Ok(())
    }

    fn commit(path: &Path, message: &str) -> ShadowResult<()> {
        Self::git_command(&["commit", "-q", "-m", message], path)?;
        Ok(())
    }

    fn remove_file(path: &Path, file: &str) -> ShadowResult<()> {
        // --ignore-unmatch: removing an untracked or absent file is a no-op.
        Self::git_command(&["rm", "-q", "--ignore-unmatch", "-f", "--", file], path)?;
        Ok(())
    }

    fn add_remote(path: &Path, name: &str, url: &str) -> ShadowResult<()> {
        Self::git_command(&["remote", "add", name, url], path)?;
        Ok(())
    }

    fn remove_remote(path: &Path, name: &str) -> ShadowResult<()> {
        Self::git_command(&["remote", "remove", name], path)?;
        Ok(())
    }

    fn push_all(path: &Path, remote: &str) -> ShadowResult<()> {
        Self::git_command(&["push", "--quiet", "--all", remote], path)?;
        Ok(())
    }

    fn pull(path: &Path, remote: &str, branch: &str) -> ShadowResult<()> {
        Self::git_command(&["pull", "--quiet", remote, branch], path)?;
        Ok(())
    }

    fn gc_aggressive(path: &Path) -> ShadowResult<()> {
        Self::git_command(&["gc", "--aggressive", "--prune=now", "--quiet"], path)?;
        Ok(())
    }
}

impl StorageQuery for ShellBackend {
    fn is_git_repo(path: &Path) -> bool {
        path.is_dir() && Self::git_command(&["rev-parse", "--is-inside-work-tree"], path).is_ok()
    }

    fn current_branch(path: &Path) -> ShadowResult<Option<String>> {
        Self::git_command(&["symbolic-ref", "--short", "HEAD"], path)
            .map_or_else(|_| Ok(None), |branch| Ok(Some(branch)))
    }

    fn branches(path: &Path) -> ShadowResult<Vec<String>> {
        let output = Self::git_command(&["branch", "--format=%(refname:short)"], path)?;
        Ok(output
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(String::from)
            .collect())
    }

    fn has_staged_changes(path: &Path) -> ShadowResult<bool> {
        // --cached compares against HEAD, or the empty tree on an unborn branch.
        let output = Self::git_command(&["diff", "--cached", "--name-only"], path)?;
        Ok(!output.is_empty())
    }

    fn log(path: &Path, file: Option<&str>, count: usize) -> ShadowResult<String> {
        let count_arg = format!("-n{count}");
        let mut args = vec!["log", "--oneline", &count_arg];
        if let Some(file) = file {
            args.push("--");
            args.push(file);
        }
        Self::git_command(&args, path)
    }

    fn diff(path: &Path, refs: Option<(&str, &str)>) -> ShadowResult<String> {
        match refs {
            Some((from, to)) => Self::git_command(&["diff", from, to], path),
            None => Self::git_command(&["diff", "HEAD"], path),
        }
    }

    fn show_file(path: &Path, refname: &str, file: &str) -> ShadowResult<Vec<u8>> {
        let spec = format!("{refname}:{file}");
        Self::git_command_bytes(&["show", &spec], path)
    }

    fn remotes(path: &Path) -> ShadowResult<String> {
        Self::git_command(&["remote", "-v"], path)
    }
}
