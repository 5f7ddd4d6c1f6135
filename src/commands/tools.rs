//! Tools command implementation

use crate::error::Result;
use crate::tool::AnalysisTool;

/// Run tools command
pub fn run() -> Result<()> {
    for tool in AnalysisTool::all() {
        println!("{:<12} {}", tool.id(), tool.description());
    }

    Ok(())
}
