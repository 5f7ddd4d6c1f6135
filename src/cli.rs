//! CLI definitions using clap derive API

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::output::OutputFormat;
use crate::settings::{DEFAULT_TOOL, SOURCE_ROOT_ENV, TOOL_ENV};

/// exclude-list - static analysis exclusion resolver
///
/// Turn a JSON exclusion manifest into the path exclusions a static analyzer expects.
#[derive(Parser, Debug)]
#[command(
    name = "exclude-list",
    author,
    version,
    color = clap::ColorChoice::Auto,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Resolve a JSON exclusion manifest into static analyzer exclusions",
    long_about = "exclude-list reads a manifest of paths that must not be analyzed, checks that \
                  every declared path (wildcards included) exists under the source tree root, \
                  and prints the paths in the exclusion syntax of the selected analysis tool.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n    \
                  exclude-list resolve docs/misra/exclude-list.json\n    \
                  exclude-list -r ~/src/xen/xen check exclude-list.json\n    \
                  exclude-list resolve exclude-list.json --format cppcheck-suppressions -o suppressions.txt\n    \
                  exclude-list tools"
)]
pub struct Cli {
    /// Source tree root that manifest paths are relative to (defaults to current directory)
    #[arg(long, short = 'r', global = true, env = SOURCE_ROOT_ENV)]
    pub source_root: Option<PathBuf>,

    /// Analysis tool whose exclusion syntax is produced
    #[arg(long, short = 't', global = true, env = TOOL_ENV, default_value = DEFAULT_TOOL)]
    pub tool: String,

    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Resolve a manifest and print the exclusion list
    Resolve(ResolveArgs),

    /// Validate a manifest against the source tree without printing exclusions
    Check(CheckArgs),

    /// List supported analysis tools
    Tools,

    /// Show version information
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the resolve command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Print one exclusion per line:\n    exclude-list resolve exclude-list.json\n\n\
                  Print a JSON array:\n    exclude-list resolve exclude-list.json --format json\n\n\
                  Write a cppcheck suppressions list:\n    exclude-list resolve exclude-list.json --format cppcheck-suppressions -o suppressions.txt")]
pub struct ResolveArgs {
    /// Path to the JSON exclusion manifest
    pub manifest: PathBuf,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value_t = OutputFormat::Lines)]
    pub format: OutputFormat,

    /// Write the result to a file instead of stdout
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,
}

/// Arguments for the check command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Check a manifest in CI:\n    exclude-list check exclude-list.json\n\n\
                  Show every matched path:\n    exclude-list check exclude-list.json -v")]
pub struct CheckArgs {
    /// Path to the JSON exclusion manifest
    pub manifest: PathBuf,
}

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    exclude-list completions --shell bash > ~/.bash_completion.d/exclude-list\n\n\
                  Generate zsh completions:\n    exclude-list completions --shell zsh > ~/.zfunc/_exclude-list\n\n\
                  Generate fish completions:\n    exclude-list completions --shell fish > ~/.config/fish/completions/exclude-list.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    #[arg(long)]
    pub shell: String,
}
