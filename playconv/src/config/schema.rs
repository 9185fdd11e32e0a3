//! Configuration schema definitions.
//!
//! Every field is optional so that files, environment variables and
//! programmatic overrides can be layered. The `effective_*` accessors and
//! [`Config::destination_for`] fill the gaps with built-in defaults.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::format::PathFormat;
use crate::mount::{MountCorrelation, MountMapResolver, StaticMountResolver, SystemMountResolver};

/// Complete configuration structure.
///
/// # Examples
///
/// ```
/// use playconv::config::Config;
/// use playconv::PathFormat;
/// use std::path::PathBuf;
///
/// let config = Config {
///     source_format: Some(PathFormat::Posix),
///     playlist_dir: Some(PathBuf::from("/music/playlists")),
///     ..Default::default()
/// };
/// assert_eq!(
///     config.destination_for(PathFormat::Windows),
///     Some(PathBuf::from("/music/playlistsNTFS"))
/// );
/// ```
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Format of the playlists this library maintains.
    pub source_format: Option<PathFormat>,

    /// Formats produced by `export` when none are named.
    pub types: Option<Vec<PathFormat>>,

    /// Where source playlists live; a directory or a single file.
    pub playlist_dir: Option<PathBuf>,

    /// Explicit destination per format, overriding the derived default.
    pub destinations: Option<BTreeMap<PathFormat, PathBuf>>,

    /// Fixed mount table. When set, `df` is never queried.
    pub mounts: Option<Vec<MountCorrelation>>,
}

impl Config {
    /// The configured source format, or the host's native one.
    #[must_use]
    pub fn effective_source_format(&self) -> PathFormat {
        self.source_format.unwrap_or_else(PathFormat::host_default)
    }

    /// The configured export formats, or every format but the source one.
    #[must_use]
    pub fn effective_types(&self) -> Vec<PathFormat> {
        match &self.types {
            Some(types) => types.clone(),
            None => {
                let source = self.effective_source_format();
                PathFormat::ALL
                    .into_iter()
                    .filter(|format| *format != source)
                    .collect()
            }
        }
    }

    /// Where playlists of `format` are written.
    ///
    /// An explicit entry in `destinations` wins. Otherwise the source format
    /// maps to `playlist_dir` itself and every other format to a sibling of
    /// it whose stem carries the format's tag (`playlistsNTFS`,
    /// `mixURIPOSIX.m3u`). Returns `None` when neither is configured.
    #[must_use]
    pub fn destination_for(&self, format: PathFormat) -> Option<PathBuf> {
        if let Some(explicit) = self.destinations.as_ref().and_then(|d| d.get(&format)) {
            return Some(explicit.clone());
        }
        let base = self.playlist_dir.as_deref()?;
        if format == self.effective_source_format() {
            Some(base.to_path_buf())
        } else {
            Some(tagged_sibling(base, format.stem_tag()))
        }
    }

    /// The mount resolver this configuration selects.
    #[must_use]
    pub fn mount_resolver(&self) -> Box<dyn MountMapResolver> {
        match &self.mounts {
            Some(table) => Box::new(StaticMountResolver::new(table.clone())),
            None => Box::new(SystemMountResolver::new()),
        }
    }
}

/// `base` with `tag` appended to its file stem.
fn tagged_sibling(base: &Path, tag: &str) -> PathBuf {
    let Some(stem) = base.file_stem() else {
        return base.join(tag);
    };
    let mut name = stem.to_os_string();
    name.push(tag);
    if let Some(extension) = base.extension() {
        name.push(".");
        name.push(extension);
    }
    base.with_file_name(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn posix_config() -> Config {
        Config {
            source_format: Some(PathFormat::Posix),
            playlist_dir: Some(PathBuf::from("/music/playlists")),
            ..Default::default()
        }
    }

    #[test]
    fn test_default_types_exclude_source() {
        let config = posix_config();
        assert_eq!(
            config.effective_types(),
            vec![PathFormat::Windows, PathFormat::PosixUri, PathFormat::WindowsUri]
        );
    }

    #[test]
    fn test_default_destinations_carry_stem_tags() {
        let config = posix_config();
        assert_eq!(
            config.destination_for(PathFormat::Posix),
            Some(PathBuf::from("/music/playlists"))
        );
        assert_eq!(
            config.destination_for(PathFormat::PosixUri),
            Some(PathBuf::from("/music/playlistsURIPOSIX"))
        );
        assert_eq!(
            config.destination_for(PathFormat::WindowsUri),
            Some(PathBuf::from("/music/playlistsURINTFS"))
        );
    }

    #[test]
    fn test_tag_goes_before_extension() {
        let config = Config {
            source_format: Some(PathFormat::Windows),
            playlist_dir: Some(PathBuf::from("/music/mix.m3u")),
            ..Default::default()
        };
        assert_eq!(
            config.destination_for(PathFormat::Posix),
            Some(PathBuf::from("/music/mixPOSIX.m3u"))
        );
    }

    #[test]
    fn test_explicit_destination_wins() {
        let mut config = posix_config();
        config.destinations = Some(BTreeMap::from([(
            PathFormat::Windows,
            PathBuf::from("/export/win"),
        )]));
        assert_eq!(
            config.destination_for(PathFormat::Windows),
            Some(PathBuf::from("/export/win"))
        );
    }

    #[test]
    fn test_no_destination_without_playlist_dir() {
        assert_eq!(Config::default().destination_for(PathFormat::Posix), None);
    }

    #[test]
    fn test_static_mounts_replace_system_query() {
        let config = Config {
            mounts: Some(vec![MountCorrelation::new("/mnt/c", "C:")]),
            ..Default::default()
        };
        assert_eq!(
            config.mount_resolver().resolve(),
            vec![MountCorrelation::new("/mnt/c", "C:")]
        );
    }

    #[test]
    fn test_parse_full_yaml() {
        let yaml = r"
source_format: ntfs
types: [posix, uri-windows]
playlist_dir: /music/playlists
destinations:
  posix: /export/posix
mounts:
  - mountpoint: /mnt/c
    source: 'C:'
";
        let config: Config = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(config.source_format, Some(PathFormat::Windows));
        assert_eq!(
            config.types,
            Some(vec![PathFormat::Posix, PathFormat::WindowsUri])
        );
        assert_eq!(
            config.destination_for(PathFormat::Posix),
            Some(PathBuf::from("/export/posix"))
        );
        assert_eq!(config.mounts.unwrap().len(), 1);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        let result: Result<Config, _> = serde_yaml::from_str("auto: true\n");
        assert!(result.is_err());
    }
}
