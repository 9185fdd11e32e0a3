//! Import command implementation.
//!
//! This module implements the `import` command, which reads playlists of
//! unknown format and keeps only the entries that exist on this machine.

use crate::error::CliError;
use crate::utils::{
    build_converter, finish_batch, load_configuration, print_report, require_playlist_dir,
    GlobalOptions,
};
use clap::Args;
use playconv::{PlaylistTranscoder, TargetSpec, TranscodeOptions};
use std::path::{Path, PathBuf};

/// Convert foreign playlists into the library's format.
#[derive(Args)]
pub struct ImportCommand {
    /// Playlist files or directories to import
    #[arg(long = "path", value_name = "SRC", value_delimiter = ',', required = true)]
    pub paths: Vec<PathBuf>,

    /// New name for each imported playlist, in --path order
    #[arg(long = "file", value_name = "NAME", value_delimiter = ',')]
    pub files: Vec<String>,

    /// Print every converted path
    #[arg(long)]
    pub show_changes: bool,

    /// Append to existing playlists instead of replacing them
    #[arg(long)]
    pub append: bool,
}

impl ImportCommand {
    /// Execute the import command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.files.is_empty() && self.files.len() != self.paths.len() {
            return Err(CliError::InvalidArguments(format!(
                "{} file name(s) given for {} path(s)",
                self.files.len(),
                self.paths.len()
            )));
        }

        let config = load_configuration(global)?;
        let playlist_dir = require_playlist_dir(&config)?;
        let target_format = config.effective_source_format();

        let converter = build_converter(&config);
        let transcoder = PlaylistTranscoder::new(
            &converter,
            TranscodeOptions {
                source_format: None,
                append: self.append,
            },
        );

        let mut failures = 0;
        for (index, source) in self.paths.iter().enumerate() {
            let destination = match self.files.get(index) {
                Some(name) => playlist_dir.join(playlist_file_name(name)),
                None => playlist_dir.to_path_buf(),
            };
            let targets = TargetSpec::new().with(target_format, destination);

            log::debug!("importing {} as {target_format}", source.display());
            match transcoder.transcode_path(source, &targets) {
                Ok(reports) => {
                    for report in &reports {
                        failures += print_report("Importing", report, self.show_changes, global);
                    }
                }
                Err(e) if e.is_not_found() => {
                    failures += 1;
                    eprintln!("The filepath could not be found for: {}", source.display());
                }
                Err(e) => {
                    failures += 1;
                    eprintln!("Error: {e}");
                }
            }
        }

        finish_batch(failures)
    }
}

/// `name` with `.m3u` appended unless it already names a playlist file.
fn playlist_file_name(name: &str) -> String {
    let is_playlist = Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("m3u") || e.eq_ignore_ascii_case("m3u8"));
    if is_playlist {
        name.to_string()
    } else {
        format!("{name}.m3u")
    }
}
