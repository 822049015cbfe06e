// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Shadow operations: init, add/remove, save/restore/sync, status, checkout.
//!
//! Operations return structured reports; the `cmd` layer owns all printing.
//! Failure discipline is fail-fast: the first underlying git or filesystem
//! error stops the command, leaving already-completed sub-steps in place.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use super::ShadowContext;
use super::status::{EntryStatus, FileStatus};
use crate::error::{FsError, Result};
use crate::git::storage::{self, CommitOutcome};
use crate::utility::fs::{copy_creating_dirs, expand_dir_files};

/// Outcome of `init`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InitOutcome {
    Initialized,
    AlreadyInitialized,
}

/// Report of a `save`.
#[derive(Debug)]
pub struct SaveReport {
    pub branch: String,
    pub outcome: CommitOutcome,
}

/// Report of a `restore` (also produced by `sync` and full `checkout`).
#[derive(Debug)]
pub struct RestoreReport {
    /// Branch the storage repository ended up on (`None` when detached by
    /// a full `checkout <ref>`).
    pub branch: Option<String>,
    /// True when the shadow branch was missing and the default branch was
    /// used instead.
    pub fallback: bool,
    /// Relative paths copied back into the working tree.
    pub restored: Vec<String>,
}

/// Outcome of `checkout`.
#[derive(Debug)]
pub enum CheckoutOutcome {
    /// A single file was written into the working tree from `refname`.
    SingleFile { file: String, refname: String },
    /// The storage repository was moved to `refname` and fully restored.
    Full(RestoreReport),
}

/// Initializes the storage repository for this project identity.
///
/// Lazily creates the directory, a git repository on the default branch,
/// and an initial commit carrying the empty registry. Never deletes
/// anything; a second `init` is a no-op.
///
/// # Errors
///
/// Returns an error if directory creation or any git operation fails.
pub fn init(ctx: &ShadowContext) -> Result<InitOutcome> {
    let storage = ctx.storage_path();
    if storage::is_repo(storage) {
        return Ok(InitOutcome::AlreadyInitialized);
    }

    std::fs::create_dir_all(storage)
        .with_context(|| format!("failed to create storage directory {}", storage.display()))?;
    storage::init_repo(storage, &ctx.settings().default_branch)?;

    ctx.registry()?.save()?;
    storage::commit_all(storage, "init")?;

    info!(path = %storage.display(), "initialized storage repository");
    Ok(InitOutcome::Initialized)
}

/// Tracks one or more files or directories.
///
/// Directories expand recursively to every contained file. Each new file is
/// appended to the registry and mirrored into the storage repository. A
/// top-level path that exists as neither file nor directory is an error;
/// files already processed stay tracked (no rollback).
///
/// # Errors
///
/// Returns an error for a missing top-level path or any failed copy,
/// registry write, or commit.
pub fn add(ctx: &ShadowContext, paths: &[PathBuf]) -> Result<Vec<String>> {
    ctx.ensure_initialized()?;
    let mut registry = ctx.registry()?;
    let mut added = Vec::new();

    for path in paths {
        let absolute = if path.is_absolute() {
            path.clone()
        } else {
            ctx.work_dir().join(path)
        };

        let files: Vec<PathBuf> = if absolute.is_file() {
            vec![absolute]
        } else if absolute.is_dir() {
            expand_dir_files(&absolute)?
        } else {
            return Err(FsError::NotFound(path.display().to_string()).into());
        };

        for file in files {
            let rel = ctx.relative_path(&file)?;
            if registry.add(&rel) {
                copy_creating_dirs(&file, &ctx.storage_path().join(&rel))?;
                registry.save()?;
                debug!(path = %rel, "tracking file");
                added.push(rel);
            }
        }
    }

    if !added.is_empty() {
        storage::commit_all(
            ctx.storage_path(),
            &format!("add {} file(s)", added.len()),
        )?;
    }
    Ok(added)
}

/// Stops tracking a path: removes its registry lines, deletes the mirrored
/// copy, and commits the removal. Removing an untracked path is a silent
/// no-op for the registry; the commit still proceeds.
///
/// # Errors
///
/// Returns an error if the registry rewrite or a git operation fails.
pub fn remove(ctx: &ShadowContext, path: &Path) -> Result<String> {
    ctx.ensure_initialized()?;
    let rel = ctx.relative_path(path)?;

    let mut registry = ctx.registry()?;
    registry.remove(&rel);
    registry.save()?;

    storage::remove_file(ctx.storage_path(), &rel)?;
    // git rm skips a mirrored copy that was never committed; clear it too.
    let mirrored = ctx.storage_path().join(&rel);
    if mirrored.is_file() {
        std::fs::remove_file(&mirrored)
            .with_context(|| format!("failed to delete {}", mirrored.display()))?;
    }
    storage::commit_all(ctx.storage_path(), &format!("remove {rel}"))?;

    info!(path = %rel, "untracked file");
    Ok(rel)
}

/// Saves the working-tree content of every tracked file to the shadow
/// branch matching the current primary branch, creating that branch from
/// the default branch on first use.
///
/// # Errors
///
/// Returns an error if the primary branch cannot be determined or any git
/// or copy operation fails.
pub fn save(ctx: &ShadowContext, message: Option<&str>) -> Result<SaveReport> {
    ctx.ensure_initialized()?;
    let branch = ctx.primary_branch()?;
    let storage = ctx.storage_path();

    storage::ensure_branch(storage, &branch, &ctx.settings().default_branch)?;
    storage::checkout(storage, &branch)?;

    // Registry is read after the checkout; branches may track different sets.
    let registry = ctx.registry()?;
    for entry in registry.entries() {
        let local = ctx.work_dir().join(entry);
        if local.is_file() {
            copy_creating_dirs(&local, &storage.join(entry))?;
        }
    }

    let message = message.map_or_else(|| format!("save {branch}"), ToString::to_string);
    let outcome = storage::commit_all(storage, &message)?;
    info!(%branch, ?outcome, "saved shadow state");
    Ok(SaveReport { branch, outcome })
}

/// Restores tracked files for the current primary branch from storage,
/// falling back to the default branch when no shadow branch exists yet.
///
/// # Errors
///
/// Returns an error if the primary branch cannot be determined or any git
/// or copy operation fails.
pub fn restore(ctx: &ShadowContext) -> Result<RestoreReport> {
    ctx.ensure_initialized()?;
    let branch = ctx.primary_branch()?;
    let storage = ctx.storage_path();

    let fallback = !storage::branch_exists(storage, &branch)?;
    let target = if fallback {
        ctx.settings().default_branch.clone()
    } else {
        branch
    };
    storage::checkout(storage, &target)?;

    let restored = copy_out(ctx)?;
    Ok(RestoreReport {
        branch: Some(target),
        fallback,
        restored,
    })
}

/// Pulls tracked-file content from another shadow branch into the current
/// one, then restores into the working tree. Entries missing on the source
/// branch are silently skipped.
///
/// # Errors
///
/// Returns an error if branch setup, the commit, or the restore fails.
pub fn sync(ctx: &ShadowContext, from: &str) -> Result<RestoreReport> {
    ctx.ensure_initialized()?;
    let branch = ctx.primary_branch()?;
    let storage = ctx.storage_path();

    storage::ensure_branch(storage, &branch, &ctx.settings().default_branch)?;
    storage::checkout(storage, &branch)?;

    let registry = ctx.registry()?;
    for entry in registry.entries() {
        if storage::checkout_file_from(storage, from, entry).is_err() {
            debug!(path = %entry, %from, "not present on source branch, skipped");
        }
    }
    storage::commit_all(storage, &format!("sync from {from}"))?;

    restore(ctx)
}

/// Classifies every registry entry against the storage repository's current
/// branch. Exactly one [`FileStatus`] per entry.
///
/// # Errors
///
/// Returns an error if the registry or a file cannot be read.
pub fn status(ctx: &ShadowContext) -> Result<Vec<EntryStatus>> {
    ctx.ensure_initialized()?;
    let registry = ctx.registry()?;

    let mut report = Vec::new();
    for entry in registry.entries() {
        let local = read_optional(&ctx.work_dir().join(entry))?;
        let stored = read_optional(&ctx.storage_path().join(entry))?;
        report.push(EntryStatus {
            path: entry.to_string(),
            status: FileStatus::classify(local.as_deref(), stored.as_deref()),
        });
    }
    Ok(report)
}

/// Restores historical content from `refname`.
///
/// With a file: writes that file's bytes at `refname` into the working tree
/// without touching the registry or the storage branch pointer. Without:
/// checks out `refname` in storage (possibly detaching HEAD) and restores
/// everything.
///
/// # Errors
///
/// Returns an error if the ref or file does not exist, or any copy fails.
pub fn checkout(
    ctx: &ShadowContext,
    refname: &str,
    file: Option<&str>,
) -> Result<CheckoutOutcome> {
    ctx.ensure_initialized()?;
    let storage = ctx.storage_path();

    if let Some(file) = file {
        let bytes = storage::show_file(storage, refname, file)?;
        let target = ctx.work_dir().join(file);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        std::fs::write(&target, bytes)
            .with_context(|| format!("failed to write {}", target.display()))?;
        return Ok(CheckoutOutcome::SingleFile {
            file: file.to_string(),
            refname: refname.to_string(),
        });
    }

    storage::checkout(storage, refname)?;
    let restored = copy_out(ctx)?;
    Ok(CheckoutOutcome::Full(RestoreReport {
        branch: storage::current_branch(storage)?,
        fallback: false,
        restored,
    }))
}

/// Copies every registry entry present in storage back into the working
/// tree, creating intermediate directories. Returns the restored paths.
fn copy_out(ctx: &ShadowContext) -> Result<Vec<String>> {
    let registry = ctx.registry()?;
    let mut restored = Vec::new();
    for entry in registry.entries() {
        let stored = ctx.storage_path().join(entry);
        if stored.is_file() {
            copy_creating_dirs(&stored, &ctx.work_dir().join(entry))?;
            restored.push(entry.to_string());
        }
    }
    Ok(restored)
}

fn read_optional(path: &Path) -> Result<Option<Vec<u8>>> {
    match std::fs::read(path) {
        Ok(bytes) => Ok(Some(bytes)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("failed to read {}", path.display())),
    }
}
