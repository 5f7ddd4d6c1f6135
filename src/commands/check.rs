//! Check command implementation

use console::Style;
use std::fmt::Write;

use crate::cli::CheckArgs;
use crate::error::Result;
use crate::pipeline::{self, Resolution};
use crate::settings::Settings;

/// Run check command
pub fn run(settings: &Settings, args: CheckArgs, verbose: bool) -> Result<()> {
    let resolutions = pipeline::resolve_entries(&args.manifest, settings)?;

    if verbose {
        for resolution in &resolutions {
            println!("{}", describe(resolution));
        }
    }

    println!("{}", summary(&resolutions, settings));

    Ok(())
}

fn describe(resolution: &Resolution) -> String {
    let dim = Style::new().dim();
    let mut line = format!(
        "  {} -> {} {}",
        resolution.entry.rel_path,
        resolution.exclusion,
        dim.apply_to(format!("({} matched)", resolution.matches.len()))
    );
    if let Some(comment) = &resolution.entry.comment {
        let _ = write!(line, " {}", dim.apply_to(format!("# {comment}")));
    }
    line
}

fn summary(resolutions: &[Resolution], settings: &Settings) -> String {
    let green = Style::new().green().bold();
    let paths: usize = resolutions.iter().map(|r| r.matches.len()).sum();
    format!(
        "{} {} exclusions resolved ({} paths) under {} for {}",
        green.apply_to("✓"),
        resolutions.len(),
        paths,
        settings.source_root().display(),
        settings.tool()
    )
}
