// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Repository identity resolution.
//!
//! ```text
//! remote.origin.url ──┐
//!                     ├──> SHA-256 ──> hex[..12]  (storage key)
//! abs. work dir ──────┘  (fallback)
//! ```
//!
//! Same origin ⇒ same identity, so every clone of a project shares one
//! storage repository.

use sha2::{Digest, Sha256};
use std::path::Path;

use crate::error::Result;
use crate::git::query;

/// Length of the hex identity token.
pub const IDENTITY_LEN: usize = 12;

/// Derives the identity token from an arbitrary input string.
#[must_use]
pub fn identity_from_input(input: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(input.as_bytes());
    let digest = hasher.finalize();
    let hex: String = digest.iter().map(|b| format!("{b:02x}")).collect();
    hex[..IDENTITY_LEN].to_string()
}

/// Resolves the identity of the primary repository at `work_dir`.
///
/// Uses the configured `remote.origin.url`; falls back to the absolute
/// working-directory path when no remote is configured.
///
/// # Errors
///
/// Returns an error if the working directory cannot be canonicalized.
pub fn resolve_identity(work_dir: &Path) -> Result<String> {
    let input = match query::remote_url(work_dir, "origin") {
        Ok(Some(url)) => url,
        // No remote configured, or not (yet) inspectable: key off the path.
        _ => work_dir.canonicalize()?.display().to_string(),
    };
    Ok(identity_from_input(&input))
}
