//! Analysis tool errors

use super::ExcludeError;

/// Creates an unsupported tool error
pub fn unsupported(tool: impl Into<String>) -> ExcludeError {
    ExcludeError::UnsupportedTool {
        tool: tool.into(),
        supported: format!(
            "Supported analysis tools: {}",
            crate::tool::supported_ids()
        ),
    }
}
