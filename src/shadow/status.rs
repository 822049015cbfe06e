// git-shadow: per-branch shadow storage for untracked files
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Per-entry status classification.

use serde::Serialize;

/// Classification of one tracked path, by presence in the working tree vs
/// the storage branch and byte equality when both exist.
///
/// Exactly one variant holds for every entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileStatus {
    /// Absent in both places.
    Missing,
    /// Present locally only (never saved).
    New,
    /// Present in storage only (deleted locally).
    Deleted,
    /// Present in both, byte-identical.
    Unchanged,
    /// Present in both, content differs.
    Modified,
}

impl FileStatus {
    /// Classify from presence flags and optional content.
    #[must_use]
    pub fn classify(local: Option<&[u8]>, stored: Option<&[u8]>) -> Self {
        match (local, stored) {
            (None, None) => Self::Missing,
            (Some(_), None) => Self::New,
            (None, Some(_)) => Self::Deleted,
            (Some(a), Some(b)) if a == b => Self::Unchanged,
            (Some(_), Some(_)) => Self::Modified,
        }
    }

    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::New => "new",
            Self::Deleted => "deleted",
            Self::Unchanged => "unchanged",
            Self::Modified => "modified",
        }
    }
}

impl std::fmt::Display for FileStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Status of one registry entry, as reported by `status`.
#[derive(Debug, Clone, Serialize)]
pub struct EntryStatus {
    pub path: String,
    pub status: FileStatus,
}

#[cfg(test)]
mod tests {
    use super::FileStatus;

    #[test]
    fn classification_is_exhaustive() {
        let cases: [(Option<&[u8]>, Option<&[u8]>, FileStatus); 5] = [
            (None, None, FileStatus::Missing),
            (Some(b"x"), None, FileStatus::New),
            (None, Some(b"x"), FileStatus::Deleted),
            (Some(b"x"), Some(b"x"), FileStatus::Unchanged),
            (Some(b"x"), Some(b"y"), FileStatus::Modified),
        ];
        for (local, stored, expected) in cases {
            assert_eq!(FileStatus::classify(local, stored), expected);
        }
    }

    #[test]
    fn display_strings() {
        assert_eq!(FileStatus::Missing.to_string(), "missing");
        assert_eq!(FileStatus::Modified.to_string(), "modified");
    }
}
