// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

use super::{GitError, RegistryError, ShadowError, ShadowResult};

#[test]
fn test_git_error_display() {
    let err = GitError::CommandFailed {
        command: "git commit".to_string(),
        message: "nothing to commit".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "git command failed: git commit - nothing to commit"
    );
}

#[test]
fn test_registry_error_display() {
    let err = RegistryError::ReadError {
        path: ".shadowconfig".to_string(),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "gone"),
    };
    assert_eq!(err.to_string(), "failed to read registry '.shadowconfig': gone");
}

#[test]
fn test_shadow_error_size() {
    // Every variant holds a single Box, so the enum is a thin pointer
    // plus discriminant.
    let size = std::mem::size_of::<ShadowError>();
    assert!(size <= 16, "ShadowError is {size} bytes, expected <= 16");
}

#[test]
fn test_shadow_result_size() {
    let size = std::mem::size_of::<ShadowResult<()>>();
    assert!(size <= 16, "ShadowResult<()> is {size} bytes, expected <= 16");
}

#[test]
fn test_boxed_conversion() {
    let err: ShadowError = GitError::DetachedHead {
        path: "/work/project".to_string(),
    }
    .into();
    assert!(matches!(err, ShadowError::Git(_)));
}
