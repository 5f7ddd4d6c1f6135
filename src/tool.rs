//! Analysis tool definitions and exclusion syntax rendering
//!
//! Each supported static analyzer is a variant of [`AnalysisTool`] paired with the
//! rule that turns a manifest `rel_path` into that tool's exclusion syntax.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::error::{Result, tool as tool_error};

/// A static analysis tool with a known exclusion syntax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AnalysisTool {
    /// cppcheck, which matches exclusions as path suffixes via a leading `*`
    Cppcheck,
}

impl AnalysisTool {
    /// All supported tools, in display order
    pub fn all() -> &'static [AnalysisTool] {
        &[AnalysisTool::Cppcheck]
    }

    /// Tool identifier as accepted on the command line
    pub fn id(self) -> &'static str {
        match self {
            AnalysisTool::Cppcheck => "cppcheck",
        }
    }

    /// Human readable description of the exclusion form
    pub fn description(self) -> &'static str {
        match self {
            AnalysisTool::Cppcheck => "prefix wildcard (*<rel_path>)",
        }
    }

    /// Look up a tool by identifier
    pub fn from_id(id: &str) -> Result<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|tool| tool.id() == id)
            .ok_or_else(|| tool_error::unsupported(id))
    }

    /// Render a relative path in this tool's exclusion syntax
    pub fn render(self, rel_path: &str) -> String {
        match self {
            // The tree root can be mounted anywhere on the analyzing machine
            AnalysisTool::Cppcheck => format!("*{rel_path}"),
        }
    }
}

impl FromStr for AnalysisTool {
    type Err = crate::error::ExcludeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Self::from_id(s)
    }
}

impl fmt::Display for AnalysisTool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

/// Render `rel_path` for the tool named `tool_name`
///
/// Fails when `tool_name` is not a supported tool; there is no fallback syntax.
pub fn render(rel_path: &str, tool_name: &str) -> Result<String> {
    Ok(AnalysisTool::from_id(tool_name)?.render(rel_path))
}

/// Comma separated list of supported tool identifiers
pub fn supported_ids() -> String {
    AnalysisTool::all()
        .iter()
        .map(|tool| tool.id())
        .collect::<Vec<_>>()
        .join(", ")
}
