// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Tracked-file registry: the `.shadowconfig` manifest.
//!
//! ```text
//! # comment          ignored
//!                    ignored (blank)
//! .env               entry
//! config/local.toml  entry
//! ```
//!
//! Raw lines are kept as loaded so comments and blanks survive rewrites.
//! Adds are append-only with exact-line dedup; removes are a filtered
//! rewrite of entry lines only.

use std::path::{Path, PathBuf};

use crate::config::REGISTRY_FILE;
use crate::error::{RegistryError, ShadowResult};

const HEADER: &str = "# git-shadow tracked files (one relative path per line)";

/// In-memory view of a storage repository's registry file.
#[derive(Debug, Clone)]
pub struct Registry {
    path: PathBuf,
    lines: Vec<String>,
}

fn is_entry(line: &str) -> bool {
    let trimmed = line.trim();
    !trimmed.is_empty() && !trimmed.starts_with('#')
}

impl Registry {
    /// Loads the registry from `storage_path`. A missing file yields an
    /// empty registry (it is created on first save).
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::ReadError` for any failure other than the
    /// file being absent.
    pub fn load(storage_path: &Path) -> ShadowResult<Self> {
        let path = storage_path.join(REGISTRY_FILE);
        let lines = match std::fs::read_to_string(&path) {
            Ok(content) => content.lines().map(String::from).collect(),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => vec![HEADER.to_string()],
            Err(e) => {
                return Err(RegistryError::ReadError {
                    path: path.display().to_string(),
                    source: e,
                }
                .into());
            }
        };
        Ok(Self { path, lines })
    }

    /// Active entries in file order, comments and blanks excluded.
    #[must_use]
    pub fn entries(&self) -> Vec<&str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|l| is_entry(l))
            .map(str::trim)
            .collect()
    }

    /// Whether `entry` is present as an exact line match.
    #[must_use]
    pub fn contains(&self, entry: &str) -> bool {
        self.entries().iter().any(|e| *e == entry)
    }

    /// Appends `entry` unless already present. Returns true if appended.
    pub fn add(&mut self, entry: &str) -> bool {
        if self.contains(entry) {
            return false;
        }
        self.lines.push(entry.to_string());
        true
    }

    /// Removes all exact-match lines for `entry`. Returns true if any line
    /// was removed; removing an absent entry is a silent no-op.
    pub fn remove(&mut self, entry: &str) -> bool {
        let before = self.lines.len();
        self.lines.retain(|l| !(is_entry(l) && l.trim() == entry));
        self.lines.len() != before
    }

    /// Writes the registry back to disk.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::WriteError` if the file cannot be written.
    pub fn save(&self) -> ShadowResult<()> {
        let mut content = self.lines.join("\n");
        content.push('\n');
        std::fs::write(&self.path, content).map_err(|e| RegistryError::WriteError {
            path: self.path.display().to_string(),
            source: e,
        })?;
        Ok(())
    }
}
