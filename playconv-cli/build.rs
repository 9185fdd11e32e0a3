//! Build script for playconv-cli.
//!
//! This script generates man pages at build time using clap_mangen.
//! The generated man page is placed in OUT_DIR for inclusion in release builds.
//!
//! Note: We build a minimal command structure here rather than importing from
//! the main crate, since build scripts cannot depend on the crate being built.

use clap::{Arg, Command};
use clap_mangen::Man;
use std::fs;
use std::path::PathBuf;

/// Build the CLI command structure for man page generation.
///
/// Keep this structure synchronized with src/cli.rs.
fn build_cli() -> Command {
    Command::new("playconv")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Convert playlist paths between POSIX, Windows and file URI forms")
        .long_about(
            "Converts the path entries of line-oriented playlists between POSIX paths, \
             Windows drive paths and their file: URI forms, using the mount table of a \
             Windows-hosted POSIX environment",
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .help("Enable verbose output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("quiet")
                .long("quiet")
                .help("Suppress non-essential output")
                .global(true)
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("config")
                .long("config")
                .help("Read configuration from this file instead of ~/.playconv/config.yaml")
                .value_name("PATH")
                .global(true)
                .env("PLAYCONV_CONFIG"),
        )
        .subcommands(vec![
            Command::new("export")
                .about("Convert library playlists into other formats")
                .long_about(
                    "Convert the playlists under playlist_dir into every target format, \
                     writing each to its configured destination",
                ),
            Command::new("import")
                .about("Convert foreign playlists into the library's format")
                .long_about(
                    "Read playlists of unknown format and keep only the entries that exist \
                     on this machine",
                ),
            Command::new("convert")
                .about("Convert a single path")
                .long_about("Convert one path string into the requested format and print it"),
            Command::new("mounts")
                .about("Show the POSIX to Windows mount table")
                .long_about("Print the mount correlations used to map POSIX paths onto drives"),
            Command::new("completions")
                .about("Generate shell completion scripts")
                .long_about("Generate shell completion scripts for bash, zsh, fish, or PowerShell"),
        ])
}

fn main() -> std::io::Result<()> {
    let out_dir = PathBuf::from(std::env::var("OUT_DIR").map_err(std::io::Error::other)?);
    let man_dir = out_dir.join("man");
    fs::create_dir_all(&man_dir)?;

    let man = Man::new(build_cli());
    let mut buffer = Vec::new();
    man.render(&mut buffer)?;
    fs::write(man_dir.join("playconv.1"), buffer)?;

    println!("cargo:rerun-if-changed=src/cli.rs");
    println!("cargo:rerun-if-changed=src/commands/");
    Ok(())
}
