//! Reading playlists into classified lines.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::error::{Error, Result};

/// One meaningful line of a playlist.
///
/// # Examples
///
/// ```
/// use playconv::transcode::PlaylistLine;
///
/// assert!(PlaylistLine::parse("#EXTM3U\r\n").is_directive());
/// assert_eq!(
///     PlaylistLine::parse("  /mnt/c/a.mp3 \n"),
///     PlaylistLine::Entry("/mnt/c/a.mp3".to_string())
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaylistLine {
    /// A comment or extended-M3U tag, copied verbatim to every output.
    Directive(String),
    /// A path reference, subject to conversion.
    Entry(String),
}

impl PlaylistLine {
    /// Strip line terminators and surrounding whitespace, then classify.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let text = raw.trim();
        if text.starts_with('#') {
            Self::Directive(text.to_string())
        } else {
            Self::Entry(text.to_string())
        }
    }

    /// The stripped line text.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Directive(text) | Self::Entry(text) => text,
        }
    }

    /// Whether this line is a directive.
    #[must_use]
    pub fn is_directive(&self) -> bool {
        matches!(self, Self::Directive(_))
    }
}

/// Split playlist text into classified lines.
///
/// A leading byte-order mark is ignored and blank lines are skipped; they
/// carry neither a path nor a directive.
#[must_use]
pub fn parse_playlist(content: &str) -> Vec<PlaylistLine> {
    content
        .strip_prefix('\u{feff}')
        .unwrap_or(content)
        .lines()
        .filter(|line| !line.trim().is_empty())
        .map(PlaylistLine::parse)
        .collect()
}

/// Read a UTF-8 playlist from disk.
///
/// # Errors
///
/// Returns [`Error::PathNotFound`] when the file is missing and
/// [`Error::InvalidPath`] when it cannot be read as UTF-8 text.
pub fn read_playlist(path: &Path) -> Result<Vec<PlaylistLine>> {
    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::PathNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::InvalidPath {
            path: path.to_path_buf(),
            reason: format!("Failed to read playlist: {e}"),
        },
    })?;
    Ok(parse_playlist(&content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_parse_playlist_classifies_and_strips() {
        let lines = parse_playlist("\u{feff}#EXTM3U\r\n\r\n#EXTINF:1,Song\n /mnt/c/a.mp3\r\n\n");
        assert_eq!(
            lines,
            vec![
                PlaylistLine::Directive("#EXTM3U".to_string()),
                PlaylistLine::Directive("#EXTINF:1,Song".to_string()),
                PlaylistLine::Entry("/mnt/c/a.mp3".to_string()),
            ]
        );
    }

    #[test]
    fn test_hash_inside_path_is_not_a_directive() {
        let line = PlaylistLine::parse("/music/#1 hits.mp3");
        assert!(!line.is_directive());
        assert_eq!(line.text(), "/music/#1 hits.mp3");
    }

    #[test]
    fn test_read_playlist_missing_file() {
        let temp = TempDir::new().unwrap();
        let err = read_playlist(&temp.path().join("nope.m3u")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_playlist_rejects_non_utf8() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("latin1.m3u");
        fs::write(&path, [0x2f, 0x6d, 0xfc, 0x0a]).unwrap();
        let err = read_playlist(&path).unwrap_err();
        assert!(matches!(err, Error::InvalidPath { .. }));
    }
}
