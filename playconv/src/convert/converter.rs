//! The format translation matrix.

use std::fmt;

use crate::convert::existence::{ExistenceChecker, SystemExistenceChecker};
use crate::convert::{native, uri};
use crate::format::{NativeKind, PathFormat};
use crate::mount::{MountCorrelation, MountMapResolver};

/// Result of converting one path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConversionOutcome {
    /// The path in the requested target format.
    Converted(String),
    /// The text could not be read in the source format, no mount maps it,
    /// or (when existence was required) the result does not exist.
    Unresolvable,
}

impl ConversionOutcome {
    /// The converted path, if any.
    #[must_use]
    pub fn converted(self) -> Option<String> {
        match self {
            Self::Converted(path) => Some(path),
            Self::Unresolvable => None,
        }
    }

    /// Whether the conversion succeeded.
    #[must_use]
    pub fn is_converted(&self) -> bool {
        matches!(self, Self::Converted(_))
    }
}

impl From<Option<String>> for ConversionOutcome {
    fn from(value: Option<String>) -> Self {
        value.map_or(Self::Unresolvable, Self::Converted)
    }
}

/// Converts paths between the four [`PathFormat`]s.
///
/// A converter owns one snapshot of the mount table, so every line of a
/// batch is converted against the same mapping.
///
/// # Examples
///
/// ```
/// use playconv::convert::{ConversionOutcome, PathFormatConverter};
/// use playconv::convert::existence::FakeExistenceChecker;
/// use playconv::mount::MountCorrelation;
/// use playconv::PathFormat;
///
/// let converter = PathFormatConverter::new(
///     vec![MountCorrelation::new("/mnt/c", "C:")],
///     FakeExistenceChecker::empty(),
/// );
/// assert_eq!(
///     converter.convert_known_source("/mnt/c/music/song.mp3", PathFormat::Posix, PathFormat::Windows),
///     ConversionOutcome::Converted(r"C:\music\song.mp3".to_string())
/// );
/// ```
pub struct PathFormatConverter {
    mounts: Vec<MountCorrelation>,
    checker: Box<dyn ExistenceChecker>,
}

impl fmt::Debug for PathFormatConverter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PathFormatConverter")
            .field("mounts", &self.mounts)
            .finish_non_exhaustive()
    }
}

impl PathFormatConverter {
    /// Create a converter over a resolved mount table.
    #[must_use]
    pub fn new(mounts: Vec<MountCorrelation>, checker: impl ExistenceChecker + 'static) -> Self {
        Self {
            mounts,
            checker: Box::new(checker),
        }
    }

    /// Resolve the mount table once and probe the real filesystem.
    #[must_use]
    pub fn from_resolver(resolver: &dyn MountMapResolver) -> Self {
        let mounts = resolver.resolve();
        let checker = SystemExistenceChecker::new(mounts.clone());
        Self::new(mounts, checker)
    }

    /// Replace the existence checker, keeping the mount table.
    #[must_use]
    pub fn with_checker(mut self, checker: impl ExistenceChecker + 'static) -> Self {
        self.checker = Box::new(checker);
        self
    }

    /// The mount table this converter works with.
    #[must_use]
    pub fn mounts(&self) -> &[MountCorrelation] {
        &self.mounts
    }

    /// Convert `text`, read as `source`, into `target`.
    ///
    /// The source is decoded into a native path of its family, mapped to the
    /// target family (through the mount table when the families differ),
    /// rendered in the target format and, if `must_exist` is set, probed on
    /// the filesystem as the target family's native path. An existing
    /// relative path comes back absolute.
    #[must_use]
    pub fn convert(
        &self,
        text: &str,
        source: PathFormat,
        target: PathFormat,
        must_exist: bool,
    ) -> ConversionOutcome {
        let Some(decoded) = decode(text, source) else {
            return ConversionOutcome::Unresolvable;
        };

        let mapped = match (source.native_kind(), target.native_kind()) {
            (NativeKind::Posix, NativeKind::Posix) | (NativeKind::Windows, NativeKind::Windows) => {
                Some(decoded)
            }
            (NativeKind::Posix, NativeKind::Windows) => {
                native::posix_to_windows(&decoded, &self.mounts)
            }
            (NativeKind::Windows, NativeKind::Posix) => {
                native::windows_to_posix(&decoded, &self.mounts)
            }
        };
        let Some(mut mapped) = mapped else {
            return ConversionOutcome::Unresolvable;
        };

        if must_exist {
            match self.checker.locate(&mapped, target.native_kind()) {
                Some(located) => mapped = located,
                None => return ConversionOutcome::Unresolvable,
            }
        }

        match render(&mapped, target) {
            Some(rendered) => ConversionOutcome::Converted(rendered),
            None => ConversionOutcome::Unresolvable,
        }
    }

    /// Convert a path whose format was asserted by the caller.
    ///
    /// Used when exporting: the entry comes from the library's own playlist,
    /// so existence is not re-checked.
    #[must_use]
    pub fn convert_known_source(
        &self,
        text: &str,
        source: PathFormat,
        target: PathFormat,
    ) -> ConversionOutcome {
        self.convert(text, source, target, false)
    }

    /// Convert a path of unknown format by trying every reading.
    ///
    /// Sources are tried in [`PathFormat::ALL`] order and the first reading
    /// that converts (and exists, with `must_exist`) wins. This is a
    /// best-effort policy: text valid in two families resolves to whichever
    /// comes first, not necessarily the one its author meant. Without
    /// `must_exist`, any non-empty text reads as a POSIX path.
    #[must_use]
    pub fn convert_unknown_source(
        &self,
        text: &str,
        target: PathFormat,
        must_exist: bool,
    ) -> ConversionOutcome {
        for source in PathFormat::ALL {
            let outcome = self.convert(text, source, target, must_exist);
            if outcome.is_converted() {
                log::debug!("read {text:?} as {source}, converted to {target}");
                return outcome;
            }
        }
        log::debug!("no reading of {text:?} converts to {target}");
        ConversionOutcome::Unresolvable
    }

    /// Map a POSIX path onto its Windows equivalent.
    #[must_use]
    pub fn posix_to_windows(&self, path: &str, must_exist: bool) -> ConversionOutcome {
        self.convert(path, PathFormat::Posix, PathFormat::Windows, must_exist)
    }

    /// Map a Windows path onto its POSIX equivalent.
    #[must_use]
    pub fn windows_to_posix(&self, path: &str, must_exist: bool) -> ConversionOutcome {
        self.convert(path, PathFormat::Windows, PathFormat::Posix, must_exist)
    }
}

/// Read `text` as a path in `format`, giving the normalized native path.
fn decode(text: &str, format: PathFormat) -> Option<String> {
    match format {
        PathFormat::Posix => native::normalize_posix(text),
        PathFormat::Windows => native::normalize_windows(text),
        PathFormat::PosixUri | PathFormat::WindowsUri => {
            uri::uri_to_native(text, format.native_kind())
        }
    }
}

/// Render a native path of `format`'s family in `format`.
fn render(native_path: &str, format: PathFormat) -> Option<String> {
    if format.is_uri() {
        uri::native_to_uri(native_path, format.native_kind())
    } else {
        Some(native_path.to_string())
    }
}
