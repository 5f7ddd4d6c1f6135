//! Command implementations for the exclude-list CLI

pub mod check;
pub mod completions;
pub mod resolve;
pub mod tools;
pub mod version;

use std::path::PathBuf;

use crate::error::Result;
use crate::settings::Settings;

/// Build pipeline settings from the global CLI options
///
/// The source tree root defaults to the current directory.
pub fn settings_from(source_root: Option<PathBuf>, tool: &str) -> Result<Settings> {
    let source_root = match source_root {
        Some(root) => root,
        None => std::env::current_dir()?,
    };

    Settings::from_names(source_root, tool)
}
