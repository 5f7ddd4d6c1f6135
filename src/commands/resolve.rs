//! Resolve command implementation

use std::fs;
use std::io::Write;

use crate::cli::ResolveArgs;
use crate::error::{ExcludeError, Result};
use crate::pipeline;
use crate::settings::Settings;

/// Run resolve command
pub fn run(settings: &Settings, args: ResolveArgs) -> Result<()> {
    let exclusions = pipeline::resolve_exclusions(&args.manifest, settings)?;
    let text = args.format.format(&exclusions)?;

    match args.output {
        Some(path) => {
            fs::write(&path, text).map_err(|e| ExcludeError::OutputWriteFailed {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
            tracing::info!(
                path = %path.display(),
                exclusions = exclusions.len(),
                "wrote exclusion list"
            );
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}
