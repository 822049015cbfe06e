// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Git operations module.
//!
//! ```text
//!         Public API
//!   query.rs      storage.rs
//!   (primary)     (storage repo)
//!        \            /
//!         v          v
//!      ,------------------,
//!      | backend (traits) |
//!      '--+----------+----'
//!         |          |
//!         v          v
//!     GitQuery   StorageMutation/StorageQuery
//!    (gix, read)      (git CLI)
//! ```
//!
//! **`GixBackend`** — pure Rust, no subprocess, read-only, primary repo.
//! **`ShellBackend`** — git CLI; every call scoped by an explicit repo path.

pub mod backend;
pub mod query;
pub mod storage;
