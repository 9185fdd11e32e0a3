//! Main entry point for the playconv CLI.
//!
//! Converts the path entries of playlists between POSIX, Windows and
//! `file:` URI forms:
//! - `export`: Convert library playlists into other formats
//! - `import`: Convert foreign playlists into the library's format
//! - `convert`: Convert a single path
//! - `mounts`: Show the mount table

use clap::Parser;
use playconv_cli::cli::{Cli, Command};
use playconv_cli::utils::GlobalOptions;

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Route library log records through the CLI's verbosity
    playconv::init_logger(cli.verbose, cli.quiet).install();

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config: cli.config,
    };

    let result = match cli.command {
        Command::Export(cmd) => cmd.execute(&global),
        Command::Import(cmd) => cmd.execute(&global),
        Command::Convert(cmd) => cmd.execute(&global),
        Command::Mounts(cmd) => cmd.execute(&global),
        Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
