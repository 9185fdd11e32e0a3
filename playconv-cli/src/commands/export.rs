//! Export command implementation.
//!
//! This module implements the `export` command, which converts the
//! library's own playlists into each requested target format.

use crate::cli::FormatArg;
use crate::error::CliError;
use crate::utils::{
    build_converter, finish_batch, load_configuration, print_report, require_playlist_dir,
    GlobalOptions,
};
use clap::Args;
use playconv::{Config, PathFormat, PlaylistTranscoder, TargetSpec, TranscodeOptions};
use std::path::PathBuf;

/// Convert library playlists into other formats.
#[derive(Args)]
pub struct ExportCommand {
    /// Playlists to export, relative to the configured playlist_dir
    /// (default: all of playlist_dir)
    #[arg(long = "file", value_name = "NAME", value_delimiter = ',')]
    pub files: Vec<PathBuf>,

    /// Target formats (default: `types` from the configuration)
    #[arg(
        long = "type",
        value_name = "FORMAT",
        value_enum,
        value_delimiter = ',',
        ignore_case = true
    )]
    pub types: Vec<FormatArg>,

    /// Destination for each target format, in --type order
    #[arg(long = "path", value_name = "DEST", value_delimiter = ',')]
    pub paths: Vec<PathBuf>,

    /// Print every converted path
    #[arg(long)]
    pub show_changes: bool,

    /// Append to existing playlists instead of replacing them
    #[arg(long)]
    pub append: bool,
}

impl ExportCommand {
    /// Execute the export command.
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let config = load_configuration(global)?;
        let types = self.target_formats(&config);
        let targets = self.target_spec(&config, &types)?;
        let sources = self.source_paths(&config)?;

        if !global.quiet {
            eprintln!("Exporting playlists:");
            for (format, destination) in targets.iter() {
                eprintln!("\"{format}\" to \"{}\"", destination.display());
            }
        }

        let converter = build_converter(&config);
        let transcoder = PlaylistTranscoder::new(
            &converter,
            TranscodeOptions {
                source_format: Some(config.effective_source_format()),
                append: self.append,
            },
        );

        let mut failures = 0;
        for source in &sources {
            log::debug!("exporting {}", source.display());
            match transcoder.transcode_path(source, &targets) {
                Ok(reports) => {
                    for report in &reports {
                        failures += print_report("Exporting", report, self.show_changes, global);
                    }
                }
                Err(e) if e.is_not_found() => {
                    failures += 1;
                    eprintln!("The filepath could not be found for file: {}", source.display());
                }
                Err(e) => {
                    failures += 1;
                    eprintln!("Error: {e}");
                }
            }
        }

        finish_batch(failures)
    }

    fn target_formats(&self, config: &Config) -> Vec<PathFormat> {
        if self.types.is_empty() {
            config.effective_types()
        } else {
            self.types.iter().map(|t| PathFormat::from(*t)).collect()
        }
    }

    fn target_spec(&self, config: &Config, types: &[PathFormat]) -> Result<TargetSpec, CliError> {
        let destinations = if self.paths.is_empty() {
            types
                .iter()
                .map(|format| {
                    config.destination_for(*format).ok_or_else(|| {
                        CliError::Config(format!(
                            "no destination for {format} (set playlist_dir or destinations.{format})"
                        ))
                    })
                })
                .collect::<Result<Vec<_>, _>>()?
        } else {
            self.paths.clone()
        };
        Ok(TargetSpec::from_pairs(types, destinations)?)
    }

    fn source_paths(&self, config: &Config) -> Result<Vec<PathBuf>, CliError> {
        if self.files.is_empty() {
            return Ok(vec![require_playlist_dir(config)?.to_path_buf()]);
        }
        let base = config.playlist_dir.as_deref();
        Ok(self
            .files
            .iter()
            .map(|file| base.map_or_else(|| file.clone(), |dir| dir.join(file)))
            .collect())
    }
}
