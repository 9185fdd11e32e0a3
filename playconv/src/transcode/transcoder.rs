//! The line transcoding pipeline.
//!
//! Every entry of a source playlist is converted once per target format.
//! Directives are copied to every output, entries that do not convert are
//! dropped, and each converted entry is recorded as an `(original,
//! converted)` pair for reporting.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::{Path, PathBuf};

use crate::convert::{ConversionOutcome, PathFormatConverter};
use crate::error::{Error, Result};
use crate::format::PathFormat;

use super::playlist::{read_playlist, PlaylistLine};
use super::target::{resolve_destination, TargetSpec};

/// How source entries are read and outputs are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TranscodeOptions {
    /// The format entries are known to be in. When `None`, every reading
    /// is tried and only paths that exist on disk are kept.
    pub source_format: Option<PathFormat>,
    /// Add to existing output files instead of replacing them.
    pub append: bool,
}

/// The output buffer of one target format.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TranscodeResult {
    lines: Vec<String>,
    changes: Vec<(String, String)>,
}

impl TranscodeResult {
    /// Output lines in source order.
    #[must_use]
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// `(original, converted)` pairs for every converted entry.
    #[must_use]
    pub fn changes(&self) -> &[(String, String)] {
        &self.changes
    }

    /// Whether at least one entry converted. Outputs holding only
    /// directives are not worth saving.
    #[must_use]
    pub fn has_entries(&self) -> bool {
        !self.changes.is_empty()
    }

    /// The file content for this output.
    #[must_use]
    pub fn render(&self) -> String {
        self.lines.join("\n")
    }

    fn push_directive(&mut self, text: &str) {
        self.lines.push(text.to_string());
    }

    fn push_entry(&mut self, original: &str, converted: String) {
        self.lines.push(converted.clone());
        self.changes.push((original.to_string(), converted));
    }
}

/// What happened when saving one target format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WriteOutcome {
    /// The output was saved.
    Written {
        /// The file written.
        path: PathBuf,
        /// Number of lines produced by this run.
        lines: usize,
    },
    /// No entry converted; nothing was written.
    NothingToSave,
    /// Saving failed. Other formats are unaffected.
    WriteFailed {
        /// The file that could not be written.
        path: PathBuf,
        /// Why.
        reason: String,
    },
}

/// Result and write outcome for one target format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    /// The target format.
    pub format: PathFormat,
    /// Converted lines and diff pairs.
    pub result: TranscodeResult,
    /// Whether and where the output was saved.
    pub outcome: WriteOutcome,
}

/// Everything produced from one source playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscodeReport {
    /// The playlist that was read.
    pub source: PathBuf,
    /// One report per target format, in target order.
    pub formats: Vec<FormatReport>,
}

impl TranscodeReport {
    /// The report for `format`, if it was a target.
    #[must_use]
    pub fn get(&self, format: PathFormat) -> Option<&FormatReport> {
        self.formats.iter().find(|r| r.format == format)
    }
}

/// Converts playlists into every target format.
///
/// # Examples
///
/// ```
/// use playconv::convert::{FakeExistenceChecker, PathFormatConverter};
/// use playconv::mount::MountCorrelation;
/// use playconv::transcode::{PlaylistLine, PlaylistTranscoder, TranscodeOptions};
/// use playconv::PathFormat;
///
/// let converter = PathFormatConverter::new(
///     vec![MountCorrelation::new("/mnt/c", "C:")],
///     FakeExistenceChecker::empty(),
/// );
/// let transcoder = PlaylistTranscoder::new(
///     &converter,
///     TranscodeOptions { source_format: Some(PathFormat::Posix), append: false },
/// );
///
/// let lines = vec![
///     PlaylistLine::parse("#EXTM3U"),
///     PlaylistLine::parse("/mnt/c/music/song.mp3"),
/// ];
/// let results = transcoder.build(&lines, &[PathFormat::Windows]);
/// assert_eq!(results[0].1.lines(), ["#EXTM3U", r"C:\music\song.mp3"]);
/// ```
#[derive(Debug)]
pub struct PlaylistTranscoder<'a> {
    converter: &'a PathFormatConverter,
    options: TranscodeOptions,
}

impl<'a> PlaylistTranscoder<'a> {
    /// Create a transcoder sharing `converter`'s mount table.
    #[must_use]
    pub fn new(converter: &'a PathFormatConverter, options: TranscodeOptions) -> Self {
        Self { converter, options }
    }

    /// The options this transcoder runs with.
    #[must_use]
    pub fn options(&self) -> TranscodeOptions {
        self.options
    }

    /// Convert one entry into `target`.
    #[must_use]
    pub fn convert_entry(&self, entry: &str, target: PathFormat) -> ConversionOutcome {
        match self.options.source_format {
            Some(source) => self.converter.convert_known_source(entry, source, target),
            None => self.converter.convert_unknown_source(entry, target, true),
        }
    }

    /// Convert `lines` into each of `formats`, without touching the disk.
    #[must_use]
    pub fn build(
        &self,
        lines: &[PlaylistLine],
        formats: &[PathFormat],
    ) -> Vec<(PathFormat, TranscodeResult)> {
        let mut results: Vec<(PathFormat, TranscodeResult)> = formats
            .iter()
            .map(|format| (*format, TranscodeResult::default()))
            .collect();

        for line in lines {
            for (format, result) in &mut results {
                match line {
                    PlaylistLine::Directive(text) => result.push_directive(text),
                    PlaylistLine::Entry(text) => match self.convert_entry(text, *format) {
                        ConversionOutcome::Converted(converted) => {
                            result.push_entry(text, converted);
                        }
                        ConversionOutcome::Unresolvable => {
                            log::debug!("dropping {text:?}: no {format} equivalent");
                        }
                    },
                }
            }
        }

        results
    }

    /// Convert one playlist file and save every target format.
    ///
    /// # Errors
    ///
    /// Fails only when the source cannot be read. Write failures are
    /// reported per format as [`WriteOutcome::WriteFailed`].
    pub fn transcode(&self, source_file: &Path, targets: &TargetSpec) -> Result<TranscodeReport> {
        let lines = read_playlist(source_file)?;
        log::debug!(
            "read {} lines from {}",
            lines.len(),
            source_file.display()
        );

        let formats = self
            .build(&lines, &targets.formats())
            .into_iter()
            .zip(targets.iter())
            .map(|((format, result), (_, configured))| {
                let destination = resolve_destination(configured, source_file);
                let outcome = self.save(&result, &destination);
                FormatReport {
                    format,
                    result,
                    outcome,
                }
            })
            .collect();

        Ok(TranscodeReport {
            source: source_file.to_path_buf(),
            formats,
        })
    }

    /// Convert a playlist file, or every file directly inside a directory.
    ///
    /// Directory children are processed in name order. A child that cannot
    /// be listed or read is skipped with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`Error::PathNotFound`] when `path` does not exist, and the
    /// read error of a single-file source.
    pub fn transcode_path(&self, path: &Path, targets: &TargetSpec) -> Result<Vec<TranscodeReport>> {
        let metadata = fs::metadata(path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => Error::PathNotFound {
                path: path.to_path_buf(),
            },
            _ => Error::Io(e),
        })?;

        if !metadata.is_dir() {
            return Ok(vec![self.transcode(path, targets)?]);
        }

        let children = fs::read_dir(path)?.map(|entry| entry.map(|e| e.path()));
        let files = playlist_files(path, children);

        let mut reports = Vec::with_capacity(files.len());
        for file in files {
            match self.transcode(&file, targets) {
                Ok(report) => reports.push(report),
                Err(e) => log::warn!("Skipping {}: {e}", file.display()),
            }
        }
        Ok(reports)
    }

    fn save(&self, result: &TranscodeResult, destination: &Path) -> WriteOutcome {
        if !result.has_entries() {
            return WriteOutcome::NothingToSave;
        }
        match self.write(result, destination) {
            Ok(()) => WriteOutcome::Written {
                path: destination.to_path_buf(),
                lines: result.lines().len(),
            },
            Err(e) => {
                log::warn!("Failed to write {}: {e}", destination.display());
                WriteOutcome::WriteFailed {
                    path: destination.to_path_buf(),
                    reason: e.to_string(),
                }
            }
        }
    }

    fn write(&self, result: &TranscodeResult, destination: &Path) -> Result<()> {
        if let Some(parent) = destination.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }

        let mut content = String::new();
        if self.options.append {
            match fs::read_to_string(destination) {
                Ok(existing) => {
                    content.push_str(&existing);
                    content.push('\n');
                }
                Err(e) if e.kind() == ErrorKind::NotFound => {}
                Err(e) => return Err(e.into()),
            }
        }
        content.push_str(&result.render());

        fs::write(destination, content)?;
        Ok(())
    }
}

/// The regular files among `children`, sorted by name.
fn playlist_files(
    dir: &Path,
    children: impl IntoIterator<Item = io::Result<PathBuf>>,
) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = children
        .into_iter()
        .filter_map(|child| match child {
            Ok(child) => Some(child),
            Err(e) => {
                log::warn!("Skipping an entry of {}: {e}", dir.display());
                None
            }
        })
        .filter(|child| child.is_file())
        .collect();
    files.sort();
    files
}
