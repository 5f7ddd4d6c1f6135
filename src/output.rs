//! Rendering a resolved exclusion list for consumption by a pipeline

use clap::ValueEnum;

use crate::error::{ExcludeError, Result};

/// How the exclusion list is printed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// One exclusion per line
    #[default]
    Lines,
    /// A JSON array of strings
    Json,
    /// cppcheck `--suppressions-list` file, one `*:<exclusion>` per line
    CppcheckSuppressions,
}

impl OutputFormat {
    /// Format `exclusions`, preserving their order
    pub fn format(self, exclusions: &[String]) -> Result<String> {
        let text = match self {
            OutputFormat::Lines => lines(exclusions.iter().map(String::as_str)),
            OutputFormat::Json => {
                let json = serde_json::to_string_pretty(exclusions).map_err(serialize_failed)?;
                format!("{json}\n")
            }
            OutputFormat::CppcheckSuppressions => {
                lines(exclusions.iter().map(|e| format!("*:{e}")))
            }
        };
        Ok(text)
    }
}

fn serialize_failed(err: serde_json::Error) -> ExcludeError {
    ExcludeError::IoError {
        message: format!("Failed to serialize exclusion list: {err}"),
    }
}

fn lines<I, S>(items: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    items.into_iter().fold(String::new(), |mut out, item| {
        out.push_str(item.as_ref());
        out.push('\n');
        out
    })
}
