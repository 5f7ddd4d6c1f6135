//! exclude-list - static analysis exclusion resolver
//!
//! Command line front end: resolves an exclusion manifest for a source tree and prints
//! the exclusions in the syntax of the selected analysis tool.

use clap::Parser;
use tracing_subscriber::EnvFilter;

use exclude_list::cli::{Cli, Commands};
use exclude_list::commands;
use exclude_list::error::Result;

/// Install the stderr log subscriber; `RUST_LOG` wins over `--verbose`
fn init_logging(verbose: bool) {
    let default_level = if verbose { "exclude_list=debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Resolve(args) => {
            let settings = commands::settings_from(cli.source_root, &cli.tool)?;
            commands::resolve::run(&settings, args)
        }
        Commands::Check(args) => {
            let settings = commands::settings_from(cli.source_root, &cli.tool)?;
            commands::check::run(&settings, args, cli.verbose)
        }
        Commands::Tools => commands::tools::run(),
        Commands::Version => commands::version::run(),
        Commands::Completions(args) => commands::completions::run(args),
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
