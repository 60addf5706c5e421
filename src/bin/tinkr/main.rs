#![allow(clippy::print_stdout)]

mod args;
mod check;
mod debug;
mod error;
mod export;
mod new;
mod slug;

use clap::Parser;
use proc_exit::prelude::*;

fn main() {
    human_panic::setup_panic!();
    let result = run();
    proc_exit::exit(result);
}

fn run() -> proc_exit::ExitResult {
    let cli = Cli::parse();

    args::init_logging(&cli.verbose);

    let result = match cli.command {
        Command::Init(cmd) => cmd.run(),
        Command::Check(cmd) => cmd.run(),
        Command::Export(cmd) => cmd.run(),
        Command::Slug(cmd) => cmd.run(),
        Command::Debug(cmd) => cmd.run(),
    };
    result.with_code(proc_exit::Code::FAILURE)?;

    Ok(())
}

/// Typed configuration for Tinkerer-style blogs
#[derive(Debug, Parser)]
#[command(name = "tinkr", version, about, propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity<clap_verbosity_flag::InfoLevel>,
}

#[derive(Debug, clap::Subcommand)]
enum Command {
    /// Create a new blog
    Init(new::InitArgs),
    /// Report settings the renderer would reject
    Check(check::CheckArgs),
    /// Write the config as the renderer's `conf.py`
    Export(export::ExportArgs),
    /// Print the slug a title gets with the configured separator
    Slug(slug::SlugArgs),
    /// Print blog debug information
    #[command(subcommand)]
    Debug(debug::DebugCommands),
}

#[test]
fn verify_cli() {
    use clap::CommandFactory;
    Cli::command().debug_assert();
}
