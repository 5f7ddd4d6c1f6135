//! Manifest to exclusion list pipeline
//!
//! Loads the manifest, validates every declared path in manifest order and renders it in
//! the active tool's syntax. The first failure aborts the run; no partial list is returned.

use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::manifest::{self, Entry};
use crate::resolver::PathResolver;
use crate::settings::Settings;

/// A validated and rendered manifest entry
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    /// The declared entry
    pub entry: Entry,

    /// The entry's `rel_path` in the tool's exclusion syntax
    pub exclusion: String,

    /// Existing paths the entry was checked against
    pub matches: Vec<PathBuf>,
}

/// Resolve every entry of the manifest at `manifest_path`
pub fn resolve_entries(manifest_path: &Path, settings: &Settings) -> Result<Vec<Resolution>> {
    let entries = manifest::load(manifest_path)?;
    resolve_loaded(entries, settings)
}

/// Resolve already loaded entries, keeping their order
pub fn resolve_loaded(entries: Vec<Entry>, settings: &Settings) -> Result<Vec<Resolution>> {
    let resolver = PathResolver::new(settings.source_root());
    let tool = settings.tool();

    entries
        .into_iter()
        .map(|entry| {
            let matches = resolver.validate(&entry.rel_path)?;
            let exclusion = tool.render(&entry.rel_path);
            tracing::debug!(rel_path = %entry.rel_path, %exclusion, %tool, "rendered exclusion");
            Ok(Resolution {
                entry,
                exclusion,
                matches,
            })
        })
        .collect()
}

/// Resolve the manifest at `manifest_path` into exclusion strings, in manifest order
pub fn resolve_exclusions(manifest_path: &Path, settings: &Settings) -> Result<Vec<String>> {
    Ok(resolve_entries(manifest_path, settings)?
        .into_iter()
        .map(|resolution| resolution.exclusion)
        .collect())
}

/// Same as [`resolve_exclusions`], configured from a root path and a tool identifier
pub fn resolve_exclusions_for(
    manifest_path: &Path,
    source_root: &Path,
    tool_name: &str,
) -> Result<Vec<String>> {
    let settings = Settings::from_names(source_root, tool_name)?;
    resolve_exclusions(manifest_path, &settings)
}
