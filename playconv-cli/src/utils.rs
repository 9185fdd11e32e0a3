//! Utility functions for CLI operations.
//!
//! Configuration loading, converter construction and report printing shared
//! by the `export` and `import` commands.

use crate::error::CliError;
use playconv::{Config, ConfigBuilder, PathFormatConverter, TranscodeReport, WriteOutcome};
use std::path::{Path, PathBuf};

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Explicit configuration file.
    pub config: Option<PathBuf>,
}

/// Load layered configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Environment variables
/// 2. The configuration file (`--config` or the user default)
/// 3. Built-in defaults
pub fn load_configuration(global: &GlobalOptions) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(ref path) = global.config {
        builder = builder.with_config_file(path);
    }
    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Build a converter over the mount table the configuration selects.
///
/// The table is resolved once and shared by every playlist of the run.
pub fn build_converter(config: &Config) -> PathFormatConverter {
    let resolver = config.mount_resolver();
    let converter = PathFormatConverter::from_resolver(resolver.as_ref());
    log::debug!("resolved {} mount(s)", converter.mounts().len());
    converter
}

/// The configured source playlist location.
pub fn require_playlist_dir(config: &Config) -> Result<&Path, CliError> {
    config.playlist_dir.as_deref().ok_or_else(|| {
        CliError::Config(
            "playlist_dir is not set (use the config file or PLAYCONV_PLAYLIST_DIR)".to_string(),
        )
    })
}

/// Shorten a path for display.
///
/// If the path is within the home directory, show it as ~/...
/// Otherwise, show the full path.
pub fn shorten_path(path: &Path) -> String {
    if let Some(home) = home::home_dir() {
        if let Ok(relative) = path.strip_prefix(&home) {
            return format!("~/{}", relative.display());
        }
    }
    path.display().to_string()
}

/// Print what happened to one source playlist.
///
/// Progress goes to stderr and is silenced by `--quiet`; the change list
/// requested with `--show-changes` goes to stdout. Returns the number of
/// formats that failed to save.
pub fn print_report(
    verb: &str,
    report: &TranscodeReport,
    show_changes: bool,
    global: &GlobalOptions,
) -> usize {
    if !global.quiet {
        eprintln!("{verb} file {}", shorten_path(&report.source));
    }

    let mut failures = 0;
    for format_report in &report.formats {
        if show_changes && format_report.result.has_entries() {
            println!("{}:", format_report.format);
            for (original, converted) in format_report.result.changes() {
                println!("  {original} -> {converted}");
            }
        }

        match &format_report.outcome {
            WriteOutcome::Written { path, lines } => {
                if !global.quiet {
                    eprintln!(
                        "Saving new playlist to: {} ({lines} lines)",
                        shorten_path(path)
                    );
                }
            }
            WriteOutcome::NothingToSave => {
                if !global.quiet {
                    eprintln!(
                        "Warning: playlist could not be converted to {}, no content to save",
                        format_report.format
                    );
                }
            }
            WriteOutcome::WriteFailed { path, reason } => {
                failures += 1;
                eprintln!(
                    "Error while saving the playlist to {}: {reason}",
                    path.display()
                );
            }
        }
    }
    failures
}

/// Turn the failure count of a batch into the command result.
pub fn finish_batch(failures: usize) -> Result<(), CliError> {
    if failures == 0 {
        Ok(())
    } else {
        Err(CliError::SemanticFailure(format!(
            "{failures} playlist operation(s) failed"
        )))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_path_outside_home() {
        let path = PathBuf::from("/usr/local/share/playlists");
        assert_eq!(shorten_path(&path), "/usr/local/share/playlists");
    }

    #[test]
    fn test_finish_batch() {
        assert!(finish_batch(0).is_ok());
        assert_eq!(finish_batch(2).unwrap_err().exit_code(), 1);
    }

    #[test]
    fn test_require_playlist_dir() {
        let config = Config::default();
        assert_eq!(require_playlist_dir(&config).unwrap_err().exit_code(), 7);
    }
}
