//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    CompletionsCommand, ConvertCommand, ExportCommand, ImportCommand, MountsCommand,
};
use clap::{Parser, Subcommand, ValueEnum};
use playconv::PathFormat;
use std::path::PathBuf;

/// Convert playlist paths between POSIX, Windows and file URI forms.
#[derive(Parser)]
#[command(name = "playconv")]
#[command(
    version,
    about = "Convert playlist paths between POSIX, Windows and file URI forms",
    long_about = None
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Read configuration from this file instead of ~/.playconv/config.yaml
    #[arg(long, value_name = "PATH", global = true, env = "PLAYCONV_CONFIG")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Convert library playlists into other formats
    Export(ExportCommand),

    /// Convert foreign playlists into the library's format
    Import(ImportCommand),

    /// Convert a single path
    Convert(ConvertCommand),

    /// Show the POSIX to Windows mount table
    Mounts(MountsCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}

/// A path format as named on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// POSIX path (`/mnt/c/music/a.mp3`)
    #[value(name = "posix")]
    Posix,
    /// Windows path (`C:\music\a.mp3`)
    #[value(name = "windows", alias = "ntfs")]
    Windows,
    /// POSIX file URI (`file:///mnt/c/music/a.mp3`)
    #[value(name = "uri-posix", alias = "uriposix")]
    PosixUri,
    /// Windows file URI (`file:///C:/music/a.mp3`)
    #[value(name = "uri-windows", alias = "urintfs")]
    WindowsUri,
}

impl From<FormatArg> for PathFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Posix => PathFormat::Posix,
            FormatArg::Windows => PathFormat::Windows,
            FormatArg::PosixUri => PathFormat::PosixUri,
            FormatArg::WindowsUri => PathFormat::WindowsUri,
        }
    }
}
