// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Configuration management for git-shadow.
//!
//! # Configuration Hierarchy
//!
//! ```text
//! Priority (low → high)
//! 1. defaults
//! 2. ~/.config/git-shadow/config.toml
//! 3. ./.git-shadow.toml (cwd)
//! 4. --config FILE
//! 5. GIT_SHADOW_* env vars (GIT_SHADOW_DIR selects the storage root)
//! 6. CLI overrides
//! ```

pub mod loader;

#[cfg(test)]
mod tests;

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ConfigError, Result};
use crate::logging::LogLevel;

use loader::SettingsLoader;

/// Name of the registry file at the root of every storage repository.
pub const REGISTRY_FILE: &str = ".shadowconfig";

/// Environment variable selecting the storage root.
pub const STORAGE_ROOT_ENV: &str = "GIT_SHADOW_DIR";

/// Resolved application settings.
// Unknown keys are tolerated: the GIT_SHADOW_* environment source feeds
// every matching variable through here, including GIT_SHADOW_DIR.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Root directory holding one storage repository per project identity.
    /// `None` means `~/.git-shadow`.
    pub storage_root: Option<PathBuf>,
    /// Branch used as the base for new shadow branches and as the restore
    /// fallback.
    pub default_branch: String,
    /// Remote name used by `push`/`pull` when none is given.
    pub default_remote: String,
    /// Default number of commits shown by `log`.
    pub log_count: usize,
    /// Console log level.
    pub log_level: LogLevel,
    /// Optional log file path.
    pub log_file: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            storage_root: None,
            default_branch: "main".to_string(),
            default_remote: "origin".to_string(),
            log_count: 10,
            log_level: LogLevel::WARN,
            log_file: None,
        }
    }
}

impl Settings {
    /// Create a new settings builder.
    #[must_use]
    pub fn builder() -> SettingsLoader {
        SettingsLoader::new()
    }

    /// Load settings from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the content is not valid TOML or does not match
    /// the `Settings` structure.
    pub fn parse(content: &str) -> Result<Self> {
        Self::builder().add_toml_str(content).build()
    }

    /// Resolve the storage root, falling back to `~/.git-shadow`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NoHomeDirectory` if no explicit root is set and
    /// the home directory cannot be determined.
    pub fn storage_root(&self) -> Result<PathBuf> {
        if let Some(root) = &self.storage_root {
            return Ok(root.clone());
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHomeDirectory)?;
        Ok(home.join(".git-shadow"))
    }

    /// Format settings for display, deterministically ordered.
    #[must_use]
    pub fn format_options(&self) -> Vec<String> {
        let storage = self
            .storage_root
            .as_ref()
            .map_or_else(|| "~/.git-shadow".to_string(), |p| p.display().to_string());
        vec![
            format!("default_branch = {}", self.default_branch),
            format!("default_remote = {}", self.default_remote),
            format!("log_count      = {}", self.log_count),
            format!("log_level      = {}", self.log_level.as_u8()),
            format!("storage_root   = {storage}"),
        ]
    }
}
