// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Save / restore / sync state machine over the storage repository.
//!
//! ```text
//! ShadowContext (storage root + identity + settings)
//!        |
//!   +----+--------+---------+----------+
//!   v    v        v         v          v
//!  init add/rm  save     restore    status
//!              (shadow   (fallback  (5-way
//!               branch)   notice)    classify)
//! ```
//!
//! The context is built once per invocation and injected into every
//! operation; there is no process-wide storage location.

pub mod ops;
pub mod status;

use std::path::{Path, PathBuf};

use crate::config::Settings;
use crate::error::{GitError, Result, ShadowResult};
use crate::git::{query, storage};
use crate::identity::resolve_identity;
use crate::registry::Registry;

pub use ops::{CheckoutOutcome, InitOutcome, RestoreReport, SaveReport};
pub use status::FileStatus;

/// Everything an operation needs to know about where it runs: the primary
/// work tree and the storage repository selected by the project identity.
#[derive(Debug, Clone)]
pub struct ShadowContext {
    work_dir: PathBuf,
    storage_path: PathBuf,
    settings: Settings,
}

impl ShadowContext {
    /// Resolves the context for the primary repository at `work_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if git is unavailable, the storage root cannot be
    /// determined, or identity resolution fails.
    pub fn resolve(settings: Settings, work_dir: PathBuf) -> Result<Self> {
        query::ensure_git_available()?;
        let root = settings.storage_root()?;
        // Scope to the work-tree root so registry entries stay relative to
        // it no matter where the command runs from.
        let work_dir = query::work_tree_root(&work_dir).unwrap_or(work_dir);
        let identity = resolve_identity(&work_dir)?;
        Ok(Self {
            work_dir,
            storage_path: root.join(identity),
            settings,
        })
    }

    /// Builds a context with an explicit storage path, bypassing identity
    /// resolution. Used by tests to isolate storage repositories.
    #[must_use]
    pub fn with_storage_path(settings: Settings, work_dir: PathBuf, storage_path: PathBuf) -> Self {
        Self {
            work_dir,
            storage_path,
            settings,
        }
    }

    /// Primary repository work tree.
    #[must_use]
    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Storage repository location (`<storage-root>/<identity>`).
    #[must_use]
    pub fn storage_path(&self) -> &Path {
        &self.storage_path
    }

    #[must_use]
    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Loads the tracked-file registry of this storage repository.
    ///
    /// # Errors
    ///
    /// Returns a `RegistryError` if the registry file cannot be read.
    pub fn registry(&self) -> Result<Registry> {
        Ok(Registry::load(&self.storage_path)?)
    }

    /// Fails unless the storage repository has been initialized.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` pointing at the storage path.
    pub fn ensure_initialized(&self) -> ShadowResult<()> {
        if storage::is_repo(&self.storage_path) {
            Ok(())
        } else {
            Err(GitError::NotARepository {
                path: self.storage_path.display().to_string(),
            }
            .into())
        }
    }

    /// Current branch of the primary repository; detached HEAD is an error.
    ///
    /// # Errors
    ///
    /// Returns `GitError::DetachedHead` or a discovery failure.
    pub fn primary_branch(&self) -> ShadowResult<String> {
        query::current_branch_required(&self.work_dir)
    }

    /// Resolves a user-supplied path to a registry-relative path string.
    ///
    /// # Errors
    ///
    /// Returns an error if the path lies outside the work tree.
    pub fn relative_path(&self, path: &Path) -> Result<String> {
        let absolute = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.work_dir.join(path)
        };
        let relative = absolute.strip_prefix(&self.work_dir).map_err(|_| {
            anyhow::anyhow!(
                "path {} is outside the work tree {}",
                absolute.display(),
                self.work_dir.display()
            )
        })?;
        Ok(relative.display().to_string())
    }
}
