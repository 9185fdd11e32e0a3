//! Where each target format gets written.

use std::path::{Path, PathBuf};

use crate::error::{Error, Result};
use crate::format::PathFormat;

/// Ordered destinations, one per target format.
///
/// Formats are processed in insertion order. Inserting a format twice
/// replaces its destination but keeps its original position.
///
/// # Examples
///
/// ```
/// use playconv::transcode::TargetSpec;
/// use playconv::PathFormat;
///
/// let targets = TargetSpec::new()
///     .with(PathFormat::Windows, "/out/windows")
///     .with(PathFormat::PosixUri, "/out/uri.m3u");
/// assert_eq!(targets.formats(), vec![PathFormat::Windows, PathFormat::PosixUri]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TargetSpec {
    entries: Vec<(PathFormat, PathBuf)>,
}

impl TargetSpec {
    /// No targets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Pair each format with the destination at the same position.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MismatchedArguments`] when the lists differ in
    /// length or a format is named twice.
    pub fn from_pairs(formats: &[PathFormat], destinations: Vec<PathBuf>) -> Result<Self> {
        if formats.len() != destinations.len() {
            return Err(Error::MismatchedArguments {
                details: format!(
                    "{} destination(s) given for {} format(s)",
                    destinations.len(),
                    formats.len()
                ),
            });
        }

        let mut spec = Self::new();
        for (format, destination) in formats.iter().zip(destinations) {
            if spec.destination(*format).is_some() {
                return Err(Error::MismatchedArguments {
                    details: format!("format '{format}' is named twice"),
                });
            }
            spec.insert(*format, destination);
        }
        Ok(spec)
    }

    /// Builder form of [`TargetSpec::insert`].
    #[must_use]
    pub fn with(mut self, format: PathFormat, destination: impl Into<PathBuf>) -> Self {
        self.insert(format, destination);
        self
    }

    /// Set the destination for `format`.
    pub fn insert(&mut self, format: PathFormat, destination: impl Into<PathBuf>) {
        let destination = destination.into();
        match self.entries.iter_mut().find(|(f, _)| *f == format) {
            Some(entry) => entry.1 = destination,
            None => self.entries.push((format, destination)),
        }
    }

    /// The configured destination for `format`.
    #[must_use]
    pub fn destination(&self, format: PathFormat) -> Option<&Path> {
        self.entries
            .iter()
            .find(|(f, _)| *f == format)
            .map(|(_, path)| path.as_path())
    }

    /// Target formats in processing order.
    #[must_use]
    pub fn formats(&self) -> Vec<PathFormat> {
        self.entries.iter().map(|(f, _)| *f).collect()
    }

    /// Iterate over `(format, destination)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (PathFormat, &Path)> {
        self.entries.iter().map(|(f, p)| (*f, p.as_path()))
    }

    /// Number of target formats.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether no target format is configured.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(PathFormat, PathBuf)> for TargetSpec {
    fn from_iter<I: IntoIterator<Item = (PathFormat, PathBuf)>>(iter: I) -> Self {
        let mut spec = Self::new();
        for (format, destination) in iter {
            spec.insert(format, destination);
        }
        spec
    }
}

/// Resolve the file a converted playlist is written to.
///
/// A destination that is an existing directory, or that has no extension,
/// names a directory: the source playlist's file name is appended.
///
/// # Examples
///
/// ```
/// use playconv::transcode::resolve_destination;
/// use std::path::Path;
///
/// let source = Path::new("/lists/road trip.m3u");
/// assert_eq!(
///     resolve_destination(Path::new("/export/windows"), source),
///     Path::new("/export/windows/road trip.m3u")
/// );
/// assert_eq!(
///     resolve_destination(Path::new("/export/all.m3u8"), source),
///     Path::new("/export/all.m3u8")
/// );
/// ```
#[must_use]
pub fn resolve_destination(configured: &Path, source_file: &Path) -> PathBuf {
    let names_directory = configured.is_dir() || configured.extension().is_none();
    match source_file.file_name() {
        Some(name) if names_directory => configured.join(name),
        _ => configured.to_path_buf(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_insert_replaces_in_place() {
        let mut spec = TargetSpec::new()
            .with(PathFormat::Posix, "/a")
            .with(PathFormat::Windows, "/b");
        spec.insert(PathFormat::Posix, "/c");

        assert_eq!(spec.len(), 2);
        assert_eq!(spec.formats(), vec![PathFormat::Posix, PathFormat::Windows]);
        assert_eq!(spec.destination(PathFormat::Posix), Some(Path::new("/c")));
        assert_eq!(spec.destination(PathFormat::WindowsUri), None);
    }

    #[test]
    fn test_from_pairs_checks_counts_and_duplicates() {
        let spec = TargetSpec::from_pairs(
            &[PathFormat::Windows, PathFormat::PosixUri],
            vec![PathBuf::from("/w"), PathBuf::from("/u")],
        )
        .unwrap();
        assert_eq!(spec.destination(PathFormat::PosixUri), Some(Path::new("/u")));

        let short = TargetSpec::from_pairs(&[PathFormat::Windows], vec![]);
        assert!(matches!(short, Err(Error::MismatchedArguments { .. })));

        let twice = TargetSpec::from_pairs(
            &[PathFormat::Windows, PathFormat::Windows],
            vec![PathBuf::from("/a"), PathBuf::from("/b")],
        );
        assert!(matches!(twice, Err(Error::MismatchedArguments { .. })));
    }

    #[test]
    fn test_from_iterator() {
        let spec: TargetSpec = vec![(PathFormat::WindowsUri, PathBuf::from("/x"))]
            .into_iter()
            .collect();
        assert!(!spec.is_empty());
        assert_eq!(spec.iter().next(), Some((PathFormat::WindowsUri, Path::new("/x"))));
    }

    #[test]
    fn test_existing_directory_with_dot_in_name() {
        let temp = TempDir::new().unwrap();
        let dir = temp.path().join("v1.2");
        std::fs::create_dir(&dir).unwrap();

        assert_eq!(
            resolve_destination(&dir, Path::new("mix.m3u")),
            dir.join("mix.m3u")
        );
    }
}
