//! Pipeline configuration
//!
//! The source tree root and the active analysis tool are passed into the pipeline as an
//! explicit value rather than read from process-wide state.

use std::path::{Path, PathBuf};

use crate::error::{Result, resolve as resolve_error};
use crate::tool::AnalysisTool;

/// Environment variable supplying the source tree root
pub const SOURCE_ROOT_ENV: &str = "EXCLUDE_LIST_SOURCE_ROOT";

/// Environment variable supplying the analysis tool
pub const TOOL_ENV: &str = "EXCLUDE_LIST_TOOL";

/// Tool used when none is configured
pub const DEFAULT_TOOL: &str = "cppcheck";

/// Read-only configuration for one pipeline run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    source_root: PathBuf,
    tool: AnalysisTool,
}

impl Settings {
    /// Create settings for an existing source tree root
    ///
    /// The root is canonicalized so error messages show where paths were looked up.
    pub fn new(source_root: impl AsRef<Path>, tool: AnalysisTool) -> Result<Self> {
        let source_root = source_root.as_ref();
        let display = source_root.display().to_string();

        let canonical = dunce::canonicalize(source_root)
            .map_err(|e| resolve_error::invalid_root(&display, e.to_string()))?;

        if !canonical.is_dir() {
            return Err(resolve_error::invalid_root(display, "not a directory"));
        }

        Ok(Self {
            source_root: canonical,
            tool,
        })
    }

    /// Create settings from a root path and a tool identifier
    ///
    /// The tool name is checked first, so an unsupported tool is reported even when the
    /// root is also wrong.
    pub fn from_names(source_root: impl AsRef<Path>, tool_name: &str) -> Result<Self> {
        let tool = AnalysisTool::from_id(tool_name)?;
        Self::new(source_root, tool)
    }

    /// Source tree root declared paths are resolved against
    pub fn source_root(&self) -> &Path {
        &self.source_root
    }

    /// Analysis tool whose exclusion syntax is produced
    pub fn tool(&self) -> AnalysisTool {
        self.tool
    }
}
