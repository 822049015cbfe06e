// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! CLI module for git-shadow using clap derive.
//!
//! # Command Structure
//!
//! ```text
//! git-shadow [global options] <command>
//! init | add | remove | save | restore | status | ls
//! diff | log | sync | checkout | push | pull
//! remote {add|remove|list} | gc
//! install-hooks | uninstall-hooks | options
//! ```

pub mod global;
pub mod remote;
pub mod snapshot;
pub mod track;

#[cfg(test)]
mod tests;

use crate::cli::global::GlobalOptions;
use crate::cli::remote::{PullArgs, PushArgs, RemoteArgs};
use crate::cli::snapshot::{CheckoutArgs, DiffArgs, LogArgs, SaveArgs, StatusArgs, SyncArgs};
use crate::cli::track::{AddArgs, LsArgs, RemoveArgs};
use clap::{Parser, Subcommand};

/// Per-branch shadow storage for untracked files.
///
/// Keeps files like `.env` out of your main repository while persisting
/// and restoring them per branch in a parallel git repository.
#[derive(Debug, Parser)]
#[command(
    name = "git-shadow",
    author,
    version,
    about = "Per-branch shadow storage for untracked files",
    arg_required_else_help = true,
    after_help = "STORAGE:\n\n\
                  Shadowed files live in a parallel git repository under the\n\
                  storage root (default ~/.git-shadow, override with the\n\
                  GIT_SHADOW_DIR environment variable), keyed by a hash of\n\
                  this repository's origin URL. One shadow branch mirrors\n\
                  each primary branch."
)]
pub struct Cli {
    /// Global options shared by all commands
    #[command(flatten)]
    pub global: GlobalOptions,

    /// Command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Initializes the storage repository for this project.
    Init,

    /// Tracks files or directories.
    Add(AddArgs),

    /// Stops tracking a file.
    Remove(RemoveArgs),

    /// Saves tracked files to the current branch's shadow.
    Save(SaveArgs),

    /// Restores tracked files for the current branch.
    Restore,

    /// Shows the state of every tracked file.
    Status(StatusArgs),

    /// Lists tracked files or shadow branches.
    Ls(LsArgs),

    /// Shows unsaved changes, or a diff between two shadow branches.
    Diff(DiffArgs),

    /// Shows shadow commit history.
    Log(LogArgs),

    /// Pulls tracked content from another shadow branch, then restores.
    Sync(SyncArgs),

    /// Restores historical content from a ref.
    Checkout(CheckoutArgs),

    /// Pushes all shadow branches to a remote.
    Push(PushArgs),

    /// Pulls the current shadow branch from a remote.
    Pull(PullArgs),

    /// Manages storage repository remotes.
    Remote(RemoteArgs),

    /// Garbage-collects the storage repository.
    Gc,

    /// Installs the post-checkout hook in this repository.
    #[command(name = "install-hooks")]
    InstallHooks,

    /// Removes the post-checkout hook.
    #[command(name = "uninstall-hooks")]
    UninstallHooks,

    /// Lists the resolved settings.
    Options,
}

/// Parses command-line arguments.
#[must_use]
pub fn parse() -> Cli {
    Cli::parse()
}
