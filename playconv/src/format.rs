//! The four path representations and the two native families behind them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::Error;

/// The native path family a format belongs to.
///
/// `PosixUri` is a POSIX path underneath and `WindowsUri` a Windows path,
/// so existence checks and mount mapping only ever deal with these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeKind {
    /// Slash-separated POSIX path.
    Posix,
    /// Drive-letter or UNC path with backslash separators.
    Windows,
}

/// A representation of a file location inside a playlist.
///
/// # Examples
///
/// ```
/// use playconv::PathFormat;
///
/// let format: PathFormat = "uri-windows".parse().unwrap();
/// assert_eq!(format, PathFormat::WindowsUri);
///
/// // identifiers used by older configuration files are still accepted
/// assert_eq!("ntfs".parse::<PathFormat>().unwrap(), PathFormat::Windows);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PathFormat {
    /// `/mnt/c/music/song.mp3`
    Posix,
    /// `C:\music\song.mp3`
    Windows,
    /// `file:///mnt/c/music/song.mp3`
    PosixUri,
    /// `file:///C:/music/song.mp3`
    WindowsUri,
}

impl PathFormat {
    /// Every format, in the order unknown-source resolution tries them.
    pub const ALL: [Self; 4] = [Self::Posix, Self::Windows, Self::PosixUri, Self::WindowsUri];

    /// Canonical identifier used in configuration and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
            Self::PosixUri => "uri-posix",
            Self::WindowsUri => "uri-windows",
        }
    }

    /// Tag appended to a playlist's file stem when deriving a default
    /// destination for this format.
    #[must_use]
    pub const fn stem_tag(self) -> &'static str {
        match self {
            Self::Posix => "POSIX",
            Self::Windows => "NTFS",
            Self::PosixUri => "URIPOSIX",
            Self::WindowsUri => "URINTFS",
        }
    }

    /// The native family underneath this format.
    #[must_use]
    pub const fn native_kind(self) -> NativeKind {
        match self {
            Self::Posix | Self::PosixUri => NativeKind::Posix,
            Self::Windows | Self::WindowsUri => NativeKind::Windows,
        }
    }

    /// Whether this format is a `file:` URI.
    #[must_use]
    pub const fn is_uri(self) -> bool {
        matches!(self, Self::PosixUri | Self::WindowsUri)
    }

    /// The native format for the host platform.
    #[must_use]
    pub const fn host_default() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }
}

impl fmt::Display for PathFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PathFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "posix" => Ok(Self::Posix),
            "windows" | "ntfs" => Ok(Self::Windows),
            "uri-posix" | "uriposix" => Ok(Self::PosixUri),
            "uri-windows" | "urintfs" => Ok(Self::WindowsUri),
            _ => Err(Error::InvalidFormat {
                value: s.to_string(),
            }),
        }
    }
}

impl Serialize for PathFormat {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for PathFormat {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Parse a comma separated list of format identifiers.
///
/// Empty items (from doubled or trailing commas) are skipped.
///
/// # Errors
///
/// Returns [`Error::InvalidFormat`] for the first unknown identifier.
///
/// # Examples
///
/// ```
/// use playconv::format::{parse_format_list, PathFormat};
///
/// let formats = parse_format_list("windows, uri-posix,").unwrap();
/// assert_eq!(formats, vec![PathFormat::Windows, PathFormat::PosixUri]);
/// ```
pub fn parse_format_list(list: &str) -> crate::Result<Vec<PathFormat>> {
    list.split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::parse)
        .collect()
}
