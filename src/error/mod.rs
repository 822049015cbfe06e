// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Error handling module.
//!
//! ```text
//!            ShadowError (16 bytes)
//!                    |
//!   +-------+-------+-------+-------+
//!   |       |       |       |       |
//!   v       v       v       v       v
//!  Git  Registry   Cfg     Fs     Hook
//!  Box    Box      Box     Box    Box
//!
//! Sub-errors (unboxed internally):
//!   Git      CommandFailed, NotARepository, DetachedHead, GitNotFound
//!   Registry ReadError, WriteError
//!   Config   InvalidValue, NoHomeDirectory
//!   Fs       NotFound
//!   Hook     ForeignHook, NoHooksDir, WriteError
//!
//! All variants boxed => ShadowError fits in 16 bytes.
//! ```

use thiserror::Error;

/// Convenience alias for `anyhow::Result`.
pub type Result<T> = anyhow::Result<T>;

/// Result type using [`ShadowError`].
pub type ShadowResult<T> = std::result::Result<T, ShadowError>;

/// Top-level application error type.
///
/// All sub-errors are boxed to keep this enum at 16 bytes on the stack.
#[derive(Debug, Error)]
pub enum ShadowError {
    /// Git operation failed.
    #[error("git error: {0}")]
    Git(#[from] Box<GitError>),

    /// Tracked-file registry error.
    #[error("registry error: {0}")]
    Registry(#[from] Box<RegistryError>),

    /// Configuration error.
    #[error("config error: {0}")]
    Config(#[from] Box<ConfigError>),

    /// Filesystem error.
    #[error("filesystem error: {0}")]
    Fs(#[from] Box<FsError>),

    /// Hook installation error.
    #[error("hook error: {0}")]
    Hook(#[from] Box<HookError>),
}

// --- From implementations for boxing ---

/// Macro to generate `From` implementations that box the source error.
macro_rules! impl_from_boxed {
    ($($error:ty => $variant:ident),+ $(,)?) => {
        $(
            impl From<$error> for ShadowError {
                fn from(err: $error) -> Self {
                    ShadowError::$variant(Box::new(err))
                }
            }
        )+
    };
}

impl_from_boxed! {
    GitError => Git,
    RegistryError => Registry,
    ConfigError => Config,
    FsError => Fs,
    HookError => Hook,
}

// --- Gix Errors ---

/// Wrapper for gix-specific errors.
///
/// gix has multiple error types that are converted through this enum.
/// Large error types are boxed to keep enum size manageable.
#[derive(Debug, Error)]
pub enum GixError {
    /// Failed to discover repository from path.
    #[error("failed to discover repository: {0}")]
    Discover(#[from] Box<gix::discover::Error>),

    /// Failed to get HEAD reference.
    #[error("failed to get head reference: {0}")]
    Head(#[from] gix::reference::find::existing::Error),
}

// --- Git Errors ---

/// Git operation errors.
#[derive(Debug, Error)]
pub enum GitError {
    /// Git command execution failed.
    #[error("git command failed: {command} - {message}")]
    CommandFailed { command: String, message: String },

    /// Error from gix library.
    #[error("gix error: {0}")]
    Gix(#[from] GixError),

    /// The current directory is not inside a git work tree.
    #[error("not a git repository: {path}")]
    NotARepository { path: String },

    /// HEAD is detached; a branch name is required.
    #[error("HEAD is detached in {path}; checkout a branch first")]
    DetachedHead { path: String },

    /// git binary not found on PATH.
    #[error("git executable not found in PATH")]
    GitNotFound,
}

// --- Registry Errors ---

/// Tracked-file registry errors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Failed to read the registry file.
    #[error("failed to read registry '{path}': {source}")]
    ReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to write the registry file.
    #[error("failed to write registry '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// --- Config Errors ---

/// Configuration-related errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value.
    #[error("invalid value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Home directory could not be resolved for the default storage root.
    #[error("cannot determine home directory for storage root")]
    NoHomeDirectory,
}

// --- Filesystem Errors ---

/// Filesystem operation errors.
#[derive(Debug, Error)]
pub enum FsError {
    /// Path not found.
    #[error("path not found: {0}")]
    NotFound(String),
}

// --- Hook Errors ---

/// Hook installation errors.
#[derive(Debug, Error)]
pub enum HookError {
    /// An unrelated hook already occupies the slot.
    #[error("refusing to overwrite existing hook: {path}")]
    ForeignHook { path: String },

    /// Hooks directory does not exist (not a git repository).
    #[error("no .git/hooks directory at {path}")]
    NoHooksDir { path: String },

    /// Failed to write the hook script.
    #[error("failed to write hook '{path}': {source}")]
    WriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

#[cfg(test)]
mod tests;
