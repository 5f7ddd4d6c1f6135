//! Manifest errors

use super::ExcludeError;

/// Creates a manifest read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> ExcludeError {
    ExcludeError::ManifestReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a manifest parse failed error
pub fn parse_failed(path: impl Into<String>, reason: impl Into<String>) -> ExcludeError {
    ExcludeError::ManifestParseFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing `content` error
pub fn missing_content(path: impl Into<String>) -> ExcludeError {
    ExcludeError::ManifestMissingContent { path: path.into() }
}

/// Creates a missing `rel_path` error for the entry at `index`
pub fn missing_rel_path(path: impl Into<String>, index: usize) -> ExcludeError {
    ExcludeError::ManifestEntryMissingPath {
        path: path.into(),
        index,
    }
}

/// Creates an invalid wildcard pattern error
pub fn invalid_pattern(rel_path: impl Into<String>, reason: impl Into<String>) -> ExcludeError {
    ExcludeError::InvalidPattern {
        rel_path: rel_path.into(),
        reason: reason.into(),
    }
}
