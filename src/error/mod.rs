//! Error types and handling for exclude-list
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! Variants are grouped by the stage that raises them:
//! - [`manifest`]: reading and structurally validating the manifest
//! - [`resolve`]: checking declared paths against the source tree
//! - [`tool`]: selecting the analysis tool syntax

pub mod manifest;
pub mod resolve;
pub mod tool;


use miette::Diagnostic;
use thiserror::Error;

/// Main error type for exclude-list operations
#[derive(Error, Diagnostic, Debug)]
pub enum ExcludeError {
    // Manifest errors
    #[error("Can't open file {path}: {reason}")]
    #[diagnostic(
        code(exclude_list::manifest::read_failed),
        help("Check that the manifest path is correct and readable")
    )]
    ManifestReadFailed { path: String, reason: String },

    #[error("JSON decoding error in file {path}: {reason}")]
    #[diagnostic(code(exclude_list::manifest::parse_failed))]
    ManifestParseFailed { path: String, reason: String },

    #[error("Malformed JSON file {path}: content field not found")]
    #[diagnostic(
        code(exclude_list::manifest::missing_content),
        help("The manifest must be an object with a `content` array of entries")
    )]
    ManifestMissingContent { path: String },

    #[error("Malformed JSON entry #{index} in {path}: rel_path field not found")]
    #[diagnostic(
        code(exclude_list::manifest::missing_rel_path),
        help("Every entry needs a `rel_path` string relative to the source tree root")
    )]
    ManifestEntryMissingPath { path: String, index: usize },

    #[error("Invalid wildcard pattern '{rel_path}': {reason}")]
    #[diagnostic(code(exclude_list::manifest::invalid_pattern))]
    InvalidPattern { rel_path: String, reason: String },

    // Resolution errors
    #[error("Malformed path: {rel_path} refers to {candidate} that does not exist")]
    #[diagnostic(
        code(exclude_list::resolve::path_not_found),
        help("Remove the stale entry from the manifest or fix its rel_path")
    )]
    PathNotFound { rel_path: String, candidate: String },

    // Tool errors
    #[error("Unimplemented for {tool}!")]
    #[diagnostic(code(exclude_list::tool::unsupported))]
    UnsupportedTool {
        tool: String,
        #[help]
        supported: String,
    },

    // Settings errors
    #[error("Invalid source tree root {path}: {reason}")]
    #[diagnostic(code(exclude_list::settings::invalid_root))]
    SourceRootInvalid { path: String, reason: String },

    // File system errors
    #[error("Failed to write output: {path}: {reason}")]
    #[diagnostic(code(exclude_list::fs::write_failed))]
    OutputWriteFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(exclude_list::fs::io_error))]
    IoError { message: String },
}

/// Coarse classification of an [`ExcludeError`]
///
/// Lets callers decide how to report a failure without matching every variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The manifest could not be read or is structurally invalid
    Manifest,
    /// A declared path does not exist under the source tree root
    Resolution,
    /// The configured analysis tool has no translation rule
    UnsupportedTool,
    /// The pipeline configuration itself is invalid
    Settings,
    /// Ambient I/O failure outside the pipeline
    Io,
}

impl ExcludeError {
    /// Returns the failure family this error belongs to
    pub fn kind(&self) -> ErrorKind {
        match self {
            ExcludeError::ManifestReadFailed { .. }
            | ExcludeError::ManifestParseFailed { .. }
            | ExcludeError::ManifestMissingContent { .. }
            | ExcludeError::ManifestEntryMissingPath { .. }
            | ExcludeError::InvalidPattern { .. } => ErrorKind::Manifest,
            ExcludeError::PathNotFound { .. } => ErrorKind::Resolution,
            ExcludeError::UnsupportedTool { .. } => ErrorKind::UnsupportedTool,
            ExcludeError::SourceRootInvalid { .. } => ErrorKind::Settings,
            ExcludeError::OutputWriteFailed { .. } | ExcludeError::IoError { .. } => {
                ErrorKind::Io
            }
        }
    }
}

impl From<std::io::Error> for ExcludeError {
    fn from(err: std::io::Error) -> Self {
        ExcludeError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, ExcludeError>;
