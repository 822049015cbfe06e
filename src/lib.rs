// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Library root.
//!
//! # Crate Architecture
//!
//! ```text
//!                        main.rs
//!                           |
//!                +----------+----------+
//!                v                     v
//!             cli (clap)          cmd (handlers)
//!                |          track / snapshot / remote
//!                +----------+----------+
//!                           v
//!              ,---------------------------,
//!              |          shadow           |
//!              |  context + save/restore   |
//!              '--+------+--------+----+---'
//!                 |      |        |    |
//!                 v      v        v    v
//!             identity  git   registry hooks
//!             (SHA-256) gix/CLI  file  post-checkout
//!
//!   +-----------------------------------------+
//!   |  foundation  error, logging, config,    |
//!   |              utility                    |
//!   +-----------------------------------------+
//! ```

pub mod cli;
pub mod cmd;
pub mod config;
pub mod error;
pub mod git;
pub mod hooks;
pub mod identity;
pub mod logging;
pub mod registry;
pub mod shadow;
pub mod utility;
