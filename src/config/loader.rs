// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Settings loading from multiple sources.
//!
//! # Loader Pipeline
//!
//! ```text
//! SettingsLoader::new()
//!   .add_default_files()      user config, then ./.git-shadow.toml
//!   .add_toml_file(--config)
//!        |
//!        v
//!    build() --> GIT_SHADOW_* env --> Settings
//! ```

use super::{STORAGE_ROOT_ENV, Settings};
use crate::error::Result;

/// Builder for loading settings from multiple sources.
pub struct SettingsLoader {
    builder: config::ConfigBuilder<config::builder::DefaultState>,
}

impl SettingsLoader {
    #[must_use]
    pub fn new() -> Self {
        Self {
            builder: config::Config::builder(),
        }
    }

    /// Adds the default configuration files: the per-user config followed by
    /// the per-directory `.git-shadow.toml`, both optional.
    #[must_use]
    pub fn add_default_files(self) -> Self {
        let loader = match dirs::config_dir() {
            Some(dir) => self.add_toml_file_optional(dir.join("git-shadow").join("config.toml")),
            None => self,
        };
        loader.add_toml_file_optional(".git-shadow.toml")
    }

    /// Adds a required TOML configuration file to the loader.
    ///
    /// The file will be read when `build()` is called. If the file doesn't
    /// exist or contains invalid TOML, `build()` will return an error.
    #[must_use]
    pub fn add_toml_file<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(true),
        );
        self
    }

    #[must_use]
    pub fn add_toml_file_optional<P: AsRef<std::path::Path>>(mut self, path: P) -> Self {
        use config::{File, FileFormat};
        self.builder = self.builder.add_source(
            File::from(path.as_ref())
                .format(FileFormat::Toml)
                .required(false),
        );
        self
    }

    #[must_use]
    pub fn add_toml_str(mut self, content: &str) -> Self {
        use config::{File, FileFormat};
        self.builder = self
            .builder
            .add_source(File::from_str(content, FileFormat::Toml));
        self
    }

    /// Builds the settings from all added sources.
    ///
    /// `GIT_SHADOW_*` environment variables override file values;
    /// `GIT_SHADOW_DIR` maps to `storage_root`.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - Required configuration files are missing.
    /// - Configuration files have invalid TOML syntax.
    /// - The merged configuration cannot be deserialized into `Settings`.
    pub fn build(self) -> Result<Settings> {
        let mut builder = self.builder.add_source(
            config::Environment::with_prefix("GIT_SHADOW").try_parsing(true),
        );

        // The documented storage-root variable does not follow the
        // prefix/key naming scheme, so it is mapped explicitly.
        if let Ok(dir) = std::env::var(STORAGE_ROOT_ENV) {
            builder = builder
                .set_override("storage_root", dir)
                .map_err(|e| anyhow::anyhow!("Config error: {e}"))?;
        }

        let cfg = builder.build()?;
        let settings: Settings = cfg.try_deserialize()?;
        Ok(settings)
    }
}

impl Default for SettingsLoader {
    fn default() -> Self {
        Self::new()
    }
}
