// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Command handlers.
//!
//! One thin handler per subcommand: prints the user-facing output markers
//! and delegates the work to `shadow`, `git::storage`, and `hooks`. No
//! business logic lives here beyond default substitution.

pub mod config;
pub mod hooks;
pub mod init;
pub mod remote;
pub mod snapshot;
pub mod track;
