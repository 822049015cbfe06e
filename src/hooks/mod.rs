// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Branch-switch hook installation.
//!
//! A generated `post-checkout` hook runs `save` then `restore` after every
//! branch-changing checkout, swallowing failures from either so a broken
//! shadow never blocks a checkout. A marker line identifies our hook;
//! foreign hooks are never overwritten or removed.

use std::path::{Path, PathBuf};

use crate::error::{HookError, ShadowResult};

const HOOK_NAME: &str = "post-checkout";
const MARKER: &str = "# installed by git-shadow";

fn hook_script() -> String {
    format!(
        "#!/bin/sh\n\
         {MARKER}\n\
         # $3 is 1 for a branch checkout, 0 for a file checkout.\n\
         [ \"$3\" = \"1\" ] || exit 0\n\
         git-shadow save >/dev/null 2>&1 || true\n\
         git-shadow restore >/dev/null 2>&1 || true\n\
         exit 0\n"
    )
}

fn hook_path(work_dir: &Path) -> ShadowResult<PathBuf> {
    let hooks_dir = work_dir.join(".git").join("hooks");
    if !hooks_dir.is_dir() {
        return Err(HookError::NoHooksDir {
            path: hooks_dir.display().to_string(),
        }
        .into());
    }
    Ok(hooks_dir.join(HOOK_NAME))
}

/// Installs (or refreshes) the post-checkout hook in the primary repository.
///
/// # Errors
///
/// Returns `HookError::ForeignHook` if an unrelated hook already exists,
/// `HookError::NoHooksDir` outside a git repository, or a write failure.
pub fn install(work_dir: &Path) -> ShadowResult<PathBuf> {
    let path = hook_path(work_dir)?;

    if path.exists() {
        let existing = std::fs::read_to_string(&path).map_err(|e| HookError::WriteError {
            path: path.display().to_string(),
            source: e,
        })?;
        if !existing.contains(MARKER) {
            return Err(HookError::ForeignHook {
                path: path.display().to_string(),
            }
            .into());
        }
    }

    std::fs::write(&path, hook_script()).map_err(|e| HookError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755)).map_err(|e| {
            HookError::WriteError {
                path: path.display().to_string(),
                source: e,
            }
        })?;
    }

    Ok(path)
}

/// Removes the hook if it carries our marker. Returns false when no
/// git-shadow hook was installed.
///
/// # Errors
///
/// Returns `HookError::ForeignHook` for an unrelated hook, or an I/O
/// failure while reading or deleting.
pub fn uninstall(work_dir: &Path) -> ShadowResult<bool> {
    let path = hook_path(work_dir)?;
    if !path.exists() {
        return Ok(false);
    }

    let existing = std::fs::read_to_string(&path).map_err(|e| HookError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    if !existing.contains(MARKER) {
        return Err(HookError::ForeignHook {
            path: path.display().to_string(),
        }
        .into());
    }

    std::fs::remove_file(&path).map_err(|e| HookError::WriteError {
        path: path.display().to_string(),
        source: e,
    })?;
    Ok(true)
}
