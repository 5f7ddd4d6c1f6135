//! Exclusion manifest loading
//!
//! The manifest is a JSON document of the form:
//!
//! ```json
//! {
//!   "content": [
//!     { "rel_path": "drivers/legacy.c", "comment": "imported from Linux" },
//!     { "rel_path": "tools/*.py" }
//!   ]
//! }
//! ```
//!
//! Loading is all-or-nothing: the first structural problem aborts the whole load.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{Result, manifest as manifest_error};

/// One declared exclusion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entry {
    /// Path relative to the source tree root, may contain wildcards
    pub rel_path: String,

    /// Free-form note explaining why the path is excluded
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl Entry {
    /// Create an entry without a comment
    pub fn new(rel_path: impl Into<String>) -> Self {
        Self {
            rel_path: rel_path.into(),
            comment: None,
        }
    }
}

/// Read and validate the manifest at `path`
pub fn load(path: &Path) -> Result<Vec<Entry>> {
    let display = path.display().to_string();
    let text =
        fs::read_to_string(path).map_err(|e| manifest_error::read_failed(&display, e.to_string()))?;

    parse(&display, &text)
}

/// Validate manifest `text`; `source` names the document in error messages
pub fn parse(source: &str, text: &str) -> Result<Vec<Entry>> {
    let document: Value = serde_json::from_str(text)
        .map_err(|e| manifest_error::parse_failed(source, e.to_string()))?;

    let Some(Value::Array(items)) = document.get("content") else {
        return Err(manifest_error::missing_content(source));
    };

    let entries = items
        .iter()
        .enumerate()
        .map(|(index, item)| parse_entry(source, index, item))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(manifest = source, entries = entries.len(), "loaded exclusion manifest");

    Ok(entries)
}

fn parse_entry(source: &str, index: usize, item: &Value) -> Result<Entry> {
    let rel_path = item
        .get("rel_path")
        .and_then(Value::as_str)
        .ok_or_else(|| manifest_error::missing_rel_path(source, index))?;

    let comment = item
        .get("comment")
        .and_then(Value::as_str)
        .map(str::to_string);

    tracing::trace!(index, rel_path, "manifest entry");

    Ok(Entry {
        rel_path: rel_path.to_string(),
        comment,
    })
}
