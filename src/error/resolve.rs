//! Path resolution errors

use super::ExcludeError;

/// Creates a path not found error for a declared `rel_path`
pub fn path_not_found(rel_path: impl Into<String>, candidate: impl Into<String>) -> ExcludeError {
    ExcludeError::PathNotFound {
        rel_path: rel_path.into(),
        candidate: candidate.into(),
    }
}

/// Creates an invalid source root error
pub fn invalid_root(path: impl Into<String>, reason: impl Into<String>) -> ExcludeError {
    ExcludeError::SourceRootInvalid {
        path: path.into(),
        reason: reason.into(),
    }
}
